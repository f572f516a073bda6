//! Text rendering of an organization tree.
//!
//! Units are printed in code order with their headcount summary, followed by their direct
//! members in position order and then their sub-units, each level indented by two spaces.

use std::fmt;

use orgtree_roster::{OrgNode, OrgTree, UnitStats};

use super::{dim, header, highlight, subheader};

/// Marker printed before leaders.
const LEADER_MARK: &str = "★";

/// Renders `tree` for the terminal.
///
/// Members with a position code at or below `leader_threshold` are marked as leaders. With
/// `units_only`, member lines are left out.
pub fn render_tree(tree: &OrgTree, leader_threshold: u32, units_only: bool) -> String {
    TreeView {
        tree,
        leader_threshold,
        units_only,
    }
    .to_string()
}

/// Display adapter for a whole tree.
struct TreeView<'a> {
    /// The tree to print.
    tree: &'a OrgTree,
    /// Position code at or below which members are leaders.
    leader_threshold: u32,
    /// Skip member lines.
    units_only: bool,
}

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in self.tree.sorted_units() {
            self.write_unit(f, unit, 0)?;
        }
        Ok(())
    }
}

impl TreeView<'_> {
    /// Writes one unit and its subtree.
    fn write_unit(&self, f: &mut fmt::Formatter<'_>, node: &OrgNode, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let title = if depth == 0 {
            header(&node.name)
        } else {
            subheader(&node.name)
        };
        let summary = match UnitStats::of(node) {
            Some(stats) => stats.to_string(),
            None => format!("総計:{}人", node.total_members),
        };
        writeln!(
            f,
            "{indent}{title} {}  {}",
            dim(&format!("[{}]", node.code)),
            dim(&summary)
        )?;

        if !self.units_only {
            for member in node.sorted_members() {
                let label = format!(
                    "{}（{}/{}）",
                    member.name, member.position_title, member.employee_number
                );
                if member.is_leader(self.leader_threshold) {
                    writeln!(f, "{indent}  {} {}", highlight(LEADER_MARK), highlight(&label))?;
                } else {
                    writeln!(f, "{indent}    {label}")?;
                }
            }
        }

        for child in node.sorted_children() {
            self.write_unit(f, child, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use orgtree_roster::load_roster;

    use super::*;

    /// Strips ANSI escape sequences.
    fn plain(input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut chars = input.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                output.push(ch);
            }
        }
        output
    }

    fn sample() -> OrgTree {
        load_roster(
            "部コード,部名,課コード,課名,職員番号,氏名,役職コード,役職\n\
             20,財務部,,,2001,鈴木,50,部長\n\
             10,総務部,12,庶務課,1003,高橋,300,主事\n\
             10,総務部,11,人事課,1002,佐藤,300,主事\n\
             10,総務部,11,人事課,1001,山田,200,課長\n\
             10,総務部,,,1000,田中,50,部長\n",
        )
        .unwrap()
        .tree
    }

    #[test]
    fn test_render_order_and_stats() {
        let text = plain(&render_tree(&sample(), 100, false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "総務部 [10]  直属:1人 総計:4人 (部長:1人)",
                "  ★ 田中（部長/1000）",
                "  人事課 [11]  2人 (主事:1人, 課長:1人)",
                "      山田（課長/1001）",
                "      佐藤（主事/1002）",
                "  庶務課 [12]  1人 (主事:1人)",
                "      高橋（主事/1003）",
                "財務部 [20]  1人 (部長:1人)",
                "  ★ 鈴木（部長/2001）",
            ]
        );
    }

    #[test]
    fn test_threshold_changes_leaders() {
        let text = plain(&render_tree(&sample(), 200, false));
        assert!(text.contains("★ 山田（課長/1001）"));
        assert!(!text.contains("★ 佐藤"));
    }

    #[test]
    fn test_units_only() {
        let text = plain(&render_tree(&sample(), 100, true));
        assert_eq!(text.lines().count(), 4);
        assert!(!text.contains("田中"));
    }

    #[test]
    fn test_unit_without_direct_members() {
        let tree = load_roster(
            "部コード,部名,課コード,課名,職員番号,氏名,役職コード,役職\n\
             10,総務部,11,人事課,1001,山田,200,課長\n",
        )
        .unwrap()
        .tree;
        let text = plain(&render_tree(&tree, 100, false));
        assert_eq!(text.lines().next(), Some("総務部 [10]  総計:1人"));
    }
}
