//! Organizational unit nodes.
//!
//! Each [`OrgNode`] owns its direct members and its child units. Children are held in an
//! insertion-ordered map keyed by [`NodeKey`], so a unit is identified within its parent by its
//! (code, name) pair and re-visiting the same pair reuses the existing node.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Member, Placement, order::compare_members, order::compare_units};

/// Position label used when a member's position title is empty.
pub const UNKNOWN_POSITION: &str = "不明";

/// Identity of a unit within its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    /// Unit code.
    pub code: String,
    /// Unit name.
    pub name: String,
}

impl NodeKey {
    /// Creates a key from a code and a name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code, self.name)
    }
}

/// Child units of a node, keyed by (code, name) in insertion order.
pub type Children = IndexMap<NodeKey, OrgNode>;

/// One organizational unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    /// Unit code.
    pub code: String,
    /// Unit name.
    pub name: String,
    /// Depth at which the unit was created (0 for top-level units).
    pub level: usize,
    /// Members filed directly under this unit, in roster order.
    pub members: Vec<Member>,
    /// Direct member count per position title.
    pub position_counts: IndexMap<String, usize>,
    /// Members of this unit and all descendants. Zero until the tree is aggregated.
    pub total_members: usize,
    /// Child units.
    #[serde(with = "children_serde")]
    pub children: Children,
}

impl OrgNode {
    /// Creates an empty unit.
    pub fn unit(code: impl Into<String>, name: impl Into<String>, level: usize) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            level,
            members: Vec::new(),
            position_counts: IndexMap::new(),
            total_members: 0,
            children: IndexMap::new(),
        }
    }

    /// Returns this unit's key within its parent.
    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.code.clone(), self.name.clone())
    }

    /// Returns the child with the given key, creating it at `level` if absent.
    pub fn child_or_insert(&mut self, key: NodeKey, level: usize) -> &mut Self {
        self.children
            .entry(key)
            .or_insert_with_key(|key| Self::unit(key.code.clone(), key.name.clone(), level))
    }

    /// Files a member directly under this unit.
    ///
    /// Appends the member, counts it under its position title (or [`UNKNOWN_POSITION`]), and
    /// records this unit as the member's placement.
    pub fn attach(&mut self, mut member: Member) {
        let position = if member.position_title.is_empty() {
            UNKNOWN_POSITION.to_string()
        } else {
            member.position_title.clone()
        };
        *self.position_counts.entry(position).or_insert(0) += 1;

        member.place(Placement {
            org_code: self.code.clone(),
            org_name: self.name.clone(),
            level: self.level,
        });
        self.members.push(member);
    }

    /// Returns the number of members filed directly under this unit.
    pub fn direct_members(&self) -> usize {
        self.members.len()
    }

    /// Returns true if this unit has no child units.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of units in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Self::node_count).sum::<usize>()
    }

    /// Returns direct members in display order.
    pub fn sorted_members(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.iter().collect();
        members.sort_by(|a, b| compare_members(a, b));
        members
    }

    /// Returns child units in display order.
    pub fn sorted_children(&self) -> Vec<&Self> {
        let mut children: Vec<&Self> = self.children.values().collect();
        children.sort_by(|a, b| compare_units(a, b));
        children
    }

    /// Returns an iterator over this unit and all descendants in pre-order (depth-first),
    /// children in insertion order.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }
}

/// Iterator for pre-order traversal of units.
pub struct PreorderIter<'a> {
    /// Stack of units to visit (rightmost children pushed first).
    stack: Vec<&'a OrgNode>,
}

impl<'a> PreorderIter<'a> {
    /// Creates an iterator over several sibling roots, visited in the given order.
    pub(crate) fn over<I>(roots: I) -> Self
    where
        I: IntoIterator<Item = &'a OrgNode>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self {
            stack: roots.into_iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a OrgNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so the first child is visited next
        self.stack.extend(node.children.values().rev());
        Some(node)
    }
}

/// Serializes children as a plain sequence of nodes; keys are rebuilt from each node.
pub(crate) mod children_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Children, OrgNode};

    /// Writes the children in insertion order.
    pub fn serialize<S: Serializer>(children: &Children, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(children.values())
    }

    /// Reads a node sequence back into a keyed map.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Children, D::Error> {
        let nodes = Vec::<OrgNode>::deserialize(deserializer)?;
        Ok(nodes.into_iter().map(|node| (node.key(), node)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(NodeKey::new("10", "総務部").to_string(), "10:総務部");
    }

    #[test]
    fn test_child_or_insert_reuses_existing() {
        let mut parent = OrgNode::unit("1", "本部", 0);
        parent.child_or_insert(NodeKey::new("10", "総務課"), 1);
        parent
            .child_or_insert(NodeKey::new("10", "総務課"), 5)
            .attach(Member::new("a", "1", "1", "課長"));

        assert_eq!(parent.children.len(), 1);
        let child = &parent.children[&NodeKey::new("10", "総務課")];
        assert_eq!(child.level, 1);
        assert_eq!(child.members.len(), 1);
    }

    #[test]
    fn test_same_name_different_code_are_distinct() {
        let mut parent = OrgNode::unit("1", "本部", 0);
        parent.child_or_insert(NodeKey::new("10", "庶務係"), 1);
        parent.child_or_insert(NodeKey::new("20", "庶務係"), 1);
        assert_eq!(parent.children.len(), 2);
    }

    #[test]
    fn test_attach_counts_positions() {
        let mut node = OrgNode::unit("10", "総務部", 0);
        node.attach(Member::new("a", "1", "50", "部長"));
        node.attach(Member::new("b", "2", "300", "主事"));
        node.attach(Member::new("c", "3", "300", "主事"));
        node.attach(Member::new("d", "4", "", ""));

        assert_eq!(node.position_counts["部長"], 1);
        assert_eq!(node.position_counts["主事"], 2);
        assert_eq!(node.position_counts[UNKNOWN_POSITION], 1);
        assert_eq!(node.direct_members(), 4);

        let placement = node.members[3].placement().unwrap();
        assert_eq!(placement.org_code, "10");
        assert_eq!(placement.org_name, "総務部");
    }

    #[test]
    fn test_preorder_traversal() {
        let mut root = OrgNode::unit("1", "A", 0);
        let b = root.child_or_insert(NodeKey::new("2", "B"), 1);
        b.child_or_insert(NodeKey::new("3", "C"), 2);
        root.child_or_insert(NodeKey::new("4", "D"), 1);

        let names: Vec<&str> = root.iter_preorder().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(root.node_count(), 4);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_sorted_children_by_padded_code() {
        let mut root = OrgNode::unit("1", "A", 0);
        root.child_or_insert(NodeKey::new("20", "X"), 1);
        root.child_or_insert(NodeKey::new("3", "Y"), 1);
        root.child_or_insert(NodeKey::new("100", "Z"), 1);

        let names: Vec<&str> = root
            .sorted_children()
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_sorted_members_keeps_storage_order() {
        let mut node = OrgNode::unit("1", "A", 0);
        node.attach(Member::new("late", "2", "300", "主事"));
        node.attach(Member::new("boss", "9", "10", "部長"));

        let sorted: Vec<&str> = node
            .sorted_members()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(sorted, vec!["boss", "late"]);
        assert_eq!(node.members[0].name, "late");
    }
}
