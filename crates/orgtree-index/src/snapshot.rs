//! Self-contained JSON snapshots of a loaded roster.
//!
//! A snapshot carries the aggregated tree, its search index, the build report and the leader
//! threshold, so a viewer can be produced without re-parsing the CSV.

use orgtree_roster::{BuildReport, OrgTree};
use serde::{Deserialize, Serialize};

use crate::{IndexError, indexer::SearchIndex};

/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,
    /// Position code at or below which a member is a leader.
    pub leader_threshold: u32,
    /// Counts gathered while building the tree.
    pub report: BuildReport,
    /// The aggregated tree.
    pub tree: OrgTree,
    /// The index built from `tree`.
    pub index: SearchIndex,
}

impl Snapshot {
    /// Creates a snapshot at the current format version.
    pub fn new(
        leader_threshold: u32,
        report: BuildReport,
        tree: OrgTree,
        index: SearchIndex,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            leader_threshold,
            report,
            tree,
            index,
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot, rejecting other format versions.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let snapshot: Self = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(IndexError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
