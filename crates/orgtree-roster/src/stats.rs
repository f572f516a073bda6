//! Per-unit member statistics for display.

use std::fmt;

use serde::Serialize;

use crate::OrgNode;

/// Headcount summary of one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStats {
    /// Members filed directly under the unit.
    pub direct: usize,
    /// Members of the unit and all descendants.
    pub total: usize,
    /// Direct member count per position, largest first.
    pub positions: Vec<(String, usize)>,
}

impl UnitStats {
    /// Summarizes a unit. Returns `None` for units with no direct members.
    pub fn of(node: &OrgNode) -> Option<Self> {
        if node.position_counts.is_empty() {
            return None;
        }
        Some(Self {
            direct: node.direct_members(),
            total: node.total_members,
            positions: position_breakdown(node),
        })
    }
}

impl fmt::Display for UnitStats {
    /// Formats as `直属:2人 総計:5人 (部長:1人, 主事:1人)`, or `2人 (…)` when the unit has no
    /// members below it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total > self.direct {
            write!(f, "直属:{}人 総計:{}人", self.direct, self.total)?;
        } else {
            write!(f, "{}人", self.direct)?;
        }
        let items: Vec<String> = self
            .positions
            .iter()
            .map(|(position, count)| format!("{position}:{count}人"))
            .collect();
        write!(f, " ({})", items.join(", "))
    }
}

/// Returns a unit's position counts ordered by count, largest first.
///
/// Positions with equal counts keep their first-seen order.
pub fn position_breakdown(node: &OrgNode) -> Vec<(String, usize)> {
    let mut positions: Vec<(String, usize)> = node
        .position_counts
        .iter()
        .map(|(position, count)| (position.clone(), *count))
        .collect();
    positions.sort_by(|a, b| b.1.cmp(&a.1));
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Member;

    fn unit_with(titles: &[&str]) -> OrgNode {
        let mut node = OrgNode::unit("10", "総務部", 0);
        for (i, title) in titles.iter().enumerate() {
            node.attach(Member::new(format!("m{i}"), i.to_string(), "300", *title));
        }
        node.total_members = node.direct_members();
        node
    }

    #[test]
    fn test_empty_unit_has_no_stats() {
        assert!(UnitStats::of(&OrgNode::unit("1", "A", 0)).is_none());
    }

    #[test]
    fn test_breakdown_largest_first_stable() {
        let node = unit_with(&["部長", "主事", "係長", "主事"]);
        assert_eq!(
            position_breakdown(&node),
            vec![
                ("主事".to_string(), 2),
                ("部長".to_string(), 1),
                ("係長".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_display_direct_only() {
        let node = unit_with(&["部長", "主事"]);
        let stats = UnitStats::of(&node).unwrap();
        assert_eq!(stats.to_string(), "2人 (部長:1人, 主事:1人)");
    }

    #[test]
    fn test_display_with_descendants() {
        let mut node = unit_with(&["部長"]);
        node.total_members = 4;
        let stats = UnitStats::of(&node).unwrap();
        assert_eq!(stats.to_string(), "直属:1人 総計:4人 (部長:1人)");
    }
}
