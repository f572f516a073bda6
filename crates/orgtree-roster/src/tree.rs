//! The organization tree.
//!
//! [`OrgTree`] is the synthetic root of the hierarchy: it has no code or name of its own and
//! owns the top-level units. Units below it are addressed with a [`NodeRef`], the sequence of
//! keys leading from the root to the unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    aggregate::aggregate_tree,
    node::{Children, NodeKey, OrgNode, PreorderIter, children_serde},
    order::compare_units,
};

/// Path of keys from the tree root to a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRef(Vec<NodeKey>);

impl NodeRef {
    /// Creates a reference from a key path, outermost first.
    pub fn new(keys: Vec<NodeKey>) -> Self {
        Self(keys)
    }

    /// Returns the keys, outermost first.
    pub fn keys(&self) -> &[NodeKey] {
        &self.0
    }

    /// Returns a reference to a child of the unit this reference points at.
    pub fn child(&self, key: NodeKey) -> Self {
        let mut keys = self.0.clone();
        keys.push(key);
        Self(keys)
    }

    /// Returns the depth of the referenced unit (0 for top-level units).
    ///
    /// Returns `None` for the empty reference, which points at the root.
    pub fn level(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(NodeKey::to_string).collect();
        write!(f, "{}", parts.join(" / "))
    }
}

/// The root of an organization tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgTree {
    /// Top-level units.
    #[serde(with = "children_serde")]
    pub children: Children,
    /// Members attached anywhere in the tree. Zero until the tree is aggregated.
    pub total_members: usize,
}

impl OrgTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the tree has no units.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the top-level units in insertion order.
    pub fn units(&self) -> impl Iterator<Item = &OrgNode> {
        self.children.values()
    }

    /// Returns the top-level units in display order.
    pub fn sorted_units(&self) -> Vec<&OrgNode> {
        let mut units: Vec<&OrgNode> = self.children.values().collect();
        units.sort_by(|a, b| compare_units(a, b));
        units
    }

    /// Looks up a unit by reference.
    ///
    /// Returns `None` for the empty reference or a path that does not exist in this tree.
    pub fn get(&self, node_ref: &NodeRef) -> Option<&OrgNode> {
        let (first, rest) = node_ref.keys().split_first()?;
        rest.iter()
            .try_fold(self.children.get(first)?, |node, key| node.children.get(key))
    }

    /// Computes `total_members` for every unit and for the tree itself.
    ///
    /// Safe to call any number of times; returns the number of members in the tree.
    pub fn aggregate(&mut self) -> usize {
        aggregate_tree(self)
    }

    /// Returns an iterator over every unit in pre-order, children in insertion order.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter::over(self.children.values())
    }

    /// Returns the number of units in the tree.
    pub fn unit_count(&self) -> usize {
        self.children.values().map(OrgNode::node_count).sum()
    }

    /// Returns the number of members attached anywhere in the tree.
    ///
    /// Unlike [`total_members`](Self::total_members) this counts directly and does not depend
    /// on aggregation.
    pub fn member_count(&self) -> usize {
        self.iter_preorder().map(OrgNode::direct_members).sum()
    }

    /// Returns the number of levels in use (0 for an empty tree).
    pub fn depth(&self) -> usize {
        self.iter_preorder()
            .map(|node| node.level + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Member;

    fn sample_tree() -> OrgTree {
        let mut tree = OrgTree::new();
        let general = tree
            .children
            .entry(NodeKey::new("10", "総務部"))
            .or_insert_with(|| OrgNode::unit("10", "総務部", 0));
        general
            .child_or_insert(NodeKey::new("11", "人事課"), 1)
            .attach(Member::new("a", "1", "100", "課長"));
        general.child_or_insert(NodeKey::new("12", "庶務課"), 1);
        tree.children
            .entry(NodeKey::new("20", "財務部"))
            .or_insert_with(|| OrgNode::unit("20", "財務部", 0))
            .attach(Member::new("b", "2", "50", "部長"));
        tree
    }

    #[test]
    fn test_get_by_reference() {
        let tree = sample_tree();
        let node_ref = NodeRef::new(vec![
            NodeKey::new("10", "総務部"),
            NodeKey::new("11", "人事課"),
        ]);
        let node = tree.get(&node_ref).unwrap();
        assert_eq!(node.name, "人事課");
        assert_eq!(node_ref.level(), Some(1));
    }

    #[test]
    fn test_get_missing_and_empty() {
        let tree = sample_tree();
        assert!(tree.get(&NodeRef::default()).is_none());
        assert!(
            tree.get(&NodeRef::new(vec![NodeKey::new("10", "財務部")]))
                .is_none()
        );
    }

    #[test]
    fn test_counts() {
        let tree = sample_tree();
        assert_eq!(tree.unit_count(), 4);
        assert_eq!(tree.member_count(), 2);
        assert_eq!(tree.depth(), 2);
        assert!(!tree.is_empty());
        assert_eq!(OrgTree::new().depth(), 0);
    }

    #[test]
    fn test_preorder_spans_top_level_units() {
        let tree = sample_tree();
        let names: Vec<&str> = tree.iter_preorder().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["総務部", "人事課", "庶務課", "財務部"]);
    }

    #[test]
    fn test_json_round_trip_keeps_insertion_order() {
        let tree = crate::load_roster(
            "部コード,部名,課コード,課名,職員番号,氏名,役職コード,役職\n\
             20,財務部,,,2001,鈴木,300,主事\n\
             10,総務部,12,庶務課,1003,高橋,300,主事\n\
             10,総務部,11,人事課,1002,佐藤,300,主事\n\
             10,総務部,11,人事課,1001,山田,200,課長\n\
             20,財務部,,,2000,田中,50,部長\n",
        )
        .unwrap()
        .tree;

        let json = serde_json::to_string(&tree).unwrap();
        let restored: OrgTree = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tree);

        // IndexMap equality ignores order, so compare key sequences directly
        let units: Vec<&str> = restored.units().map(|n| n.name.as_str()).collect();
        assert_eq!(units, vec!["財務部", "総務部"]);
        let general = restored.children.get(&NodeKey::new("10", "総務部")).unwrap();
        let sections: Vec<&str> = general.children.keys().map(|k| k.name.as_str()).collect();
        assert_eq!(sections, vec!["庶務課", "人事課"]);

        let personnel = general.children.get(&NodeKey::new("11", "人事課")).unwrap();
        let positions: Vec<(&str, usize)> = personnel
            .position_counts
            .iter()
            .map(|(title, count)| (title.as_str(), *count))
            .collect();
        assert_eq!(positions, vec![("主事", 1), ("課長", 1)]);
        let finance = restored.children.get(&NodeKey::new("20", "財務部")).unwrap();
        let positions: Vec<&str> = finance.position_counts.keys().map(String::as_str).collect();
        assert_eq!(positions, vec!["主事", "部長"]);

        let placement = personnel.members[1].placement().unwrap();
        assert_eq!(personnel.members[1].name, "山田");
        assert_eq!(placement.org_code, "11");
        assert_eq!(placement.org_name, "人事課");
        assert_eq!(placement.level, 1);
        assert_eq!(restored.total_members, 5);
        assert_eq!(general.total_members, 3);
    }

    #[test]
    fn test_node_ref_display_and_child() {
        let root_ref = NodeRef::new(vec![NodeKey::new("10", "総務部")]);
        let child = root_ref.child(NodeKey::new("11", "人事課"));
        assert_eq!(child.to_string(), "10:総務部 / 11:人事課");
        assert_eq!(NodeRef::default().level(), None);
    }
}
