//! The loaded state an application works against.
//!
//! A [`Session`] holds at most one roster: its aggregated tree, the search index built from
//! that tree and the build report. Loading replaces all three together, and only after the new
//! tree and index are complete, so queries never see a tree paired with a stale index.

use orgtree_roster::{BuildReport, DEFAULT_LEADER_THRESHOLD, OrgTree, load_roster};
use tracing::{debug, info};

use crate::{
    IndexError,
    indexer::SearchIndex,
    search::{SearchHit, SearchParams, search},
    snapshot::Snapshot,
};

/// A tree together with the index built from it.
#[derive(Debug, Clone)]
struct Loaded {
    /// The aggregated tree.
    tree: OrgTree,
    /// Index built from `tree`.
    index: SearchIndex,
    /// Counts gathered while building `tree`.
    report: BuildReport,
}

impl Loaded {
    /// Builds the index for an aggregated tree.
    fn new(tree: OrgTree, report: BuildReport) -> Self {
        let index = SearchIndex::build(&tree);
        Self {
            tree,
            index,
            report,
        }
    }
}

/// Holds the current roster and display settings.
#[derive(Debug, Clone)]
pub struct Session {
    /// Position code at or below which a member is a leader.
    leader_threshold: u32,
    /// The loaded roster, if any.
    current: Option<Loaded>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_LEADER_THRESHOLD)
    }
}

impl Session {
    /// Creates an empty session.
    pub fn new(leader_threshold: u32) -> Self {
        Self {
            leader_threshold,
            current: None,
        }
    }

    /// Parses roster CSV text and replaces the current roster with it.
    ///
    /// On a schema error the current roster is left in place.
    pub fn load_csv(&mut self, text: &str) -> Result<&BuildReport, IndexError> {
        let roster = load_roster(text)?;
        let loaded = Loaded::new(roster.tree, roster.report);
        info!(
            members = loaded.tree.total_members,
            units = loaded.tree.unit_count(),
            entries = loaded.index.len(),
            "loaded roster"
        );
        Ok(&self.current.insert(loaded).report)
    }

    /// Returns true if a roster is loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Drops the current roster.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            debug!("cleared roster");
        }
    }

    /// Returns the current tree.
    pub fn tree(&self) -> Option<&OrgTree> {
        self.current.as_ref().map(|loaded| &loaded.tree)
    }

    /// Returns the current search index.
    pub fn index(&self) -> Option<&SearchIndex> {
        self.current.as_ref().map(|loaded| &loaded.index)
    }

    /// Returns the report from building the current tree.
    pub fn report(&self) -> Option<&BuildReport> {
        self.current.as_ref().map(|loaded| &loaded.report)
    }

    /// Returns the leader threshold.
    pub fn leader_threshold(&self) -> u32 {
        self.leader_threshold
    }

    /// Changes the leader threshold and refreshes the loaded roster.
    ///
    /// The tree is re-aggregated and the index rebuilt, so the result is the same as loading the
    /// roster again under the new threshold.
    pub fn set_leader_threshold(&mut self, threshold: u32) {
        self.leader_threshold = threshold;
        if let Some(loaded) = self.current.take() {
            let mut tree = loaded.tree;
            tree.aggregate();
            self.current = Some(Loaded::new(tree, loaded.report));
        }
        debug!(threshold, "leader threshold changed");
    }

    /// Searches the current index. Returns no hits when nothing is loaded.
    pub fn search(&self, query: &str, params: &SearchParams) -> Vec<SearchHit<'_>> {
        match &self.current {
            Some(loaded) => search(&loaded.index, query, params),
            None => Vec::new(),
        }
    }

    /// Captures the current roster as a snapshot.
    pub fn snapshot(&self) -> Result<Snapshot, IndexError> {
        let loaded = self.current.as_ref().ok_or(IndexError::NoRoster)?;
        Ok(Snapshot::new(
            self.leader_threshold,
            loaded.report,
            loaded.tree.clone(),
            loaded.index.clone(),
        ))
    }

    /// Replaces the current roster and threshold with a snapshot's contents.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.leader_threshold = snapshot.leader_threshold;
        self.current = Some(Loaded {
            tree: snapshot.tree,
            index: snapshot.index,
            report: snapshot.report,
        });
        info!(threshold = self.leader_threshold, "restored snapshot");
    }
}
