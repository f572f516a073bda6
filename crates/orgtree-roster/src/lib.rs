//! Roster parsing and organization tree construction for orgtree.
//!
//! This crate turns a staff roster CSV into an aggregated tree of organizational units:
//! - Naive comma splitting of the CSV text into a header and data rows
//! - Header schema resolution (fixed employee columns plus org-level column pairs)
//! - Tree construction with (code, name) path merging
//! - Headcount aggregation and per-position counts
//! - Display ordering for members and sibling units
//!
//! # Example
//!
//! ```
//! let csv = "部コード,部名,職員番号,氏名,役職コード,役職\n10,総務部,1001,山田太郎,50,部長";
//! let roster = orgtree_roster::load_roster(csv).unwrap();
//! assert_eq!(roster.tree.total_members, 1);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod build;
mod csv;
mod error;
mod member;
mod node;
pub mod order;
mod schema;
mod stats;
mod tree;

pub use aggregate::{aggregate_node, aggregate_tree};
pub use build::{BuildReport, PathSegment, TreeBuilder, build_tree};
pub use csv::{RawTable, parse_csv};
pub use error::RosterError;
pub use member::{Member, Placement};
pub use node::{Children, NodeKey, OrgNode, PreorderIter, UNKNOWN_POSITION};
pub use order::{compare_members, compare_units};
pub use schema::{
    EMPLOYEE_NUMBER_LABEL, FixedColumns, NAME_LABEL, OrgLevel, POSITION_CODE_LABEL,
    POSITION_TITLE_LABEL, Schema, org_levels, resolve_schema,
};
pub use stats::{UnitStats, position_breakdown};
pub use tree::{NodeRef, OrgTree};

/// Default position code at or below which a member is shown as a leader.
pub const DEFAULT_LEADER_THRESHOLD: u32 = 100;

/// A roster loaded into an aggregated tree.
#[derive(Debug, Clone)]
pub struct Roster {
    /// The resolved header layout.
    pub schema: Schema,
    /// The aggregated organization tree.
    pub tree: OrgTree,
    /// Counts gathered while building.
    pub report: BuildReport,
}

/// Parses roster CSV text, resolves its schema, builds the tree and aggregates it.
///
/// Fails only when the header lacks a required column; malformed rows are tolerated and
/// counted in the report.
pub fn load_roster(text: &str) -> Result<Roster, RosterError> {
    let table = parse_csv(text);
    let schema = resolve_schema(&table.headers)?;
    let (mut tree, report) = build_tree(&table.rows, &schema);
    tree.aggregate();
    Ok(Roster {
        schema,
        tree,
        report,
    })
}
