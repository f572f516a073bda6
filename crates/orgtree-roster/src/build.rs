//! Tree construction from roster rows.
//!
//! Each row contributes an org path (one segment per configured level) and a member. The path
//! is walked from the root, creating units on first visit and reusing them afterwards; the
//! walk stops at the first segment with an empty code or name. The member is filed under the
//! deepest unit reached. Rows whose first segment is already empty are dropped.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Member, NodeKey, OrgNode, OrgTree, Schema};

/// Number of leading rows logged at debug level while building.
const LOGGED_ROWS: usize = 3;

/// One level of a row's org path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Unit code; empty ends the path.
    pub code: String,
    /// Unit name; empty ends the path.
    pub name: String,
}

impl PathSegment {
    /// Returns true if this segment ends the path.
    pub fn is_terminal(&self) -> bool {
        self.code.is_empty() || self.name.is_empty()
    }
}

/// Counts gathered while building a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Data rows processed.
    pub rows: usize,
    /// Rows whose member was filed under a unit.
    pub attached: usize,
    /// Rows dropped because their first path segment was empty.
    pub dropped: usize,
    /// Rows with fewer cells than the schema needs; missing cells were read as empty.
    pub short_rows: usize,
}

/// Folds roster rows into an organization tree.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    /// Column layout used to read rows.
    schema: &'a Schema,
    /// The tree under construction.
    tree: OrgTree,
    /// Counts gathered so far.
    report: BuildReport,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder that reads rows with `schema`.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            tree: OrgTree::new(),
            report: BuildReport::default(),
        }
    }

    /// Adds one data row.
    pub fn push_row(&mut self, row: &[String]) {
        let index = self.report.rows;
        self.report.rows += 1;

        if row.len() < self.schema.expected_width() {
            self.report.short_rows += 1;
            debug!(
                row = index,
                cells = row.len(),
                expected = self.schema.expected_width(),
                "short row, missing cells read as empty"
            );
        }

        let path = self.org_path(row);
        let member = self.member(row);

        if index < LOGGED_ROWS {
            debug!(row = index, ?path, ?member, "roster row");
        }

        if attach(&mut self.tree, &path, member) {
            self.report.attached += 1;
        } else {
            self.report.dropped += 1;
            debug!(row = index, "row has no org path, dropped");
        }
    }

    /// Finishes building, returning the (not yet aggregated) tree and the report.
    pub fn finish(self) -> (OrgTree, BuildReport) {
        info!(
            rows = self.report.rows,
            attached = self.report.attached,
            dropped = self.report.dropped,
            short_rows = self.report.short_rows,
            units = self.tree.unit_count(),
            "built organization tree"
        );
        (self.tree, self.report)
    }

    /// Reads the org path of a row.
    fn org_path(&self, row: &[String]) -> Vec<PathSegment> {
        self.schema
            .levels
            .iter()
            .map(|level| PathSegment {
                code: cell(row, level.code_idx),
                name: cell(row, level.name_idx),
            })
            .collect()
    }

    /// Reads the member fields of a row.
    fn member(&self, row: &[String]) -> Member {
        let fixed = &self.schema.fixed;
        Member::new(
            cell(row, fixed.name),
            cell(row, fixed.employee_number),
            cell(row, fixed.position_code),
            cell(row, fixed.position_title),
        )
    }
}

/// Builds an organization tree from data rows.
///
/// Rows are processed in order, so members of a unit keep their row order. The returned tree
/// is not aggregated.
pub fn build_tree(rows: &[Vec<String>], schema: &Schema) -> (OrgTree, BuildReport) {
    let mut builder = TreeBuilder::new(schema);
    for row in rows {
        builder.push_row(row);
    }
    builder.finish()
}

/// Walks `path` from the root and files `member` under the deepest unit reached.
///
/// Returns false, leaving the tree untouched, when the first segment is terminal.
fn attach(tree: &mut OrgTree, path: &[PathSegment], member: Member) -> bool {
    let mut segments = path.iter().take_while(|segment| !segment.is_terminal());

    let Some(first) = segments.next() else {
        return false;
    };

    let mut node = tree
        .children
        .entry(NodeKey::new(first.code.clone(), first.name.clone()))
        .or_insert_with(|| OrgNode::unit(first.code.clone(), first.name.clone(), 0));

    for (offset, segment) in segments.enumerate() {
        let key = NodeKey::new(segment.code.clone(), segment.name.clone());
        node = node.child_or_insert(key, offset + 1);
    }

    node.attach(member);
    true
}

/// Returns the cell at `idx`, or an empty string when the row is too short.
fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
