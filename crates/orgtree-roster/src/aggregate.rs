//! Headcount aggregation.
//!
//! Aggregation is a post-order walk that writes each unit's total (direct members plus every
//! descendant's total) into `total_members`. It reads nothing but the current members and
//! children, so re-running it on an unchanged tree yields identical totals.

use tracing::debug;

use crate::{OrgNode, OrgTree};

/// Computes and stores the total member count of `node` and all its descendants.
///
/// Returns the total written to `node`.
pub fn aggregate_node(node: &mut OrgNode) -> usize {
    let below: usize = node.children.values_mut().map(aggregate_node).sum();
    node.total_members = node.direct_members() + below;
    node.total_members
}

/// Aggregates every unit of a tree and records the tree-wide total.
///
/// Returns the number of members attached anywhere in the tree.
pub fn aggregate_tree(tree: &mut OrgTree) -> usize {
    tree.total_members = tree.children.values_mut().map(aggregate_node).sum();
    debug!(
        top_level_units = tree.children.len(),
        total_members = tree.total_members,
        "aggregated member totals"
    );
    tree.total_members
}
