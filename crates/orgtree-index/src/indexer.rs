//! Flattening a tree into a search index.

use orgtree_roster::{NodeRef, OrgNode, OrgTree};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::{EntryKind, SearchEntry};

/// A flat, ordered list of search entries built from one tree.
///
/// Entries appear in pre-order: each unit's org entry, then its members in stored order, then
/// its children in insertion order. An index is only valid for the tree it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    /// Entries in index order.
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Builds the index for `tree`. The synthetic root is not indexed.
    pub fn build(tree: &OrgTree) -> Self {
        let mut entries = Vec::new();
        for unit in tree.units() {
            let node_ref = NodeRef::new(vec![unit.key()]);
            index_unit(unit, node_ref, &[], &mut entries);
        }

        let index = Self { entries };
        debug!(
            entries = index.len(),
            orgs = index.count(EntryKind::Org),
            members = index.count(EntryKind::Member),
            "built search index"
        );
        index
    }

    /// Returns the entries in index order.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries of one kind.
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

impl From<Vec<SearchEntry>> for SearchIndex {
    fn from(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }
}

/// Appends the entries for `node` and its subtree.
fn index_unit(
    node: &OrgNode,
    node_ref: NodeRef,
    parent_path: &[String],
    out: &mut Vec<SearchEntry>,
) {
    let mut path = parent_path.to_vec();
    path.push(node.name.clone());

    out.push(SearchEntry {
        kind: EntryKind::Org,
        path: path.clone(),
        org_name: node.name.clone(),
        org_code: node.code.clone(),
        member: None,
        node: node_ref.clone(),
    });

    out.extend(node.members.iter().map(|member| SearchEntry {
        kind: EntryKind::Member,
        path: path.clone(),
        org_name: node.name.clone(),
        org_code: node.code.clone(),
        member: Some(member.clone()),
        node: node_ref.clone(),
    }));

    for child in node.children.values() {
        index_unit(child, node_ref.child(child.key()), &path, out);
    }
}
