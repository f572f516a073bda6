//! Header schema resolution.
//!
//! A roster header consists of any number of leading (org code, org name) column pairs,
//! outermost level first, followed by the fixed employee columns. The fixed columns are located
//! by their exact labels; the org-level pairs are inferred from the columns that precede them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RosterError;

/// Header label of the employee name column.
pub const NAME_LABEL: &str = "氏名";
/// Header label of the employee number column.
pub const EMPLOYEE_NUMBER_LABEL: &str = "職員番号";
/// Header label of the position code column.
pub const POSITION_CODE_LABEL: &str = "役職コード";
/// Header label of the position title column.
pub const POSITION_TITLE_LABEL: &str = "役職";

/// Column indices of one organizational level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgLevel {
    /// Index of the org code column.
    pub code_idx: usize,
    /// Index of the org name column.
    pub name_idx: usize,
}

/// Column indices of the fixed employee columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedColumns {
    /// Index of the employee name column.
    pub name: usize,
    /// Index of the employee number column.
    pub employee_number: usize,
    /// Index of the position code column.
    pub position_code: usize,
    /// Index of the position title column.
    pub position_title: usize,
}

impl FixedColumns {
    /// Returns the largest fixed column index.
    pub fn max_index(&self) -> usize {
        self.name
            .max(self.employee_number)
            .max(self.position_code)
            .max(self.position_title)
    }
}

/// The resolved layout of a roster header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Org-level column pairs, outermost first.
    pub levels: Vec<OrgLevel>,
    /// The fixed employee columns.
    pub fixed: FixedColumns,
}

impl Schema {
    /// Returns the number of cells a row needs for every configured column to be present.
    pub fn expected_width(&self) -> usize {
        let level_max = self
            .levels
            .iter()
            .map(|level| level.code_idx.max(level.name_idx))
            .max()
            .unwrap_or(0);
        level_max.max(self.fixed.max_index()) + 1
    }
}

/// Resolves the schema of a roster header.
///
/// Fails with [`RosterError::MissingColumns`] naming every absent fixed column.
pub fn resolve_schema(headers: &[String]) -> Result<Schema, RosterError> {
    let find = |label: &str| headers.iter().position(|h| h == label);

    let name = find(NAME_LABEL);
    let employee_number = find(EMPLOYEE_NUMBER_LABEL);
    let position_code = find(POSITION_CODE_LABEL);
    let position_title = find(POSITION_TITLE_LABEL);

    let (Some(name), Some(employee_number), Some(position_code), Some(position_title)) =
        (name, employee_number, position_code, position_title)
    else {
        let missing = [
            (NAME_LABEL, name),
            (EMPLOYEE_NUMBER_LABEL, employee_number),
            (POSITION_CODE_LABEL, position_code),
            (POSITION_TITLE_LABEL, position_title),
        ]
        .into_iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(label, _)| label.to_string())
        .collect();
        return Err(RosterError::MissingColumns { missing });
    };

    let levels = org_levels(headers);
    let fixed = FixedColumns {
        name,
        employee_number,
        position_code,
        position_title,
    };

    debug!(
        levels = levels.len(),
        name_idx = name,
        employee_number_idx = employee_number,
        position_code_idx = position_code,
        position_title_idx = position_title,
        "resolved roster schema"
    );

    Ok(Schema { levels, fixed })
}

/// Infers the org-level column pairs from a header row.
///
/// Pairs are taken from the columns before the employee number column, or before the name
/// column when there is no employee number column. A trailing column that cannot form a full
/// pair is dropped.
pub fn org_levels(headers: &[String]) -> Vec<OrgLevel> {
    let end = headers
        .iter()
        .position(|h| h == EMPLOYEE_NUMBER_LABEL)
        .or_else(|| headers.iter().position(|h| h == NAME_LABEL))
        .unwrap_or(0);

    (0..end)
        .step_by(2)
        .filter(|i| i + 1 < end)
        .map(|i| OrgLevel {
            code_idx: i,
            name_idx: i + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(line: &str) -> Vec<String> {
        line.split(',').map(str::to_string).collect()
    }

    #[test]
    fn test_resolve_two_levels() {
        let schema =
            resolve_schema(&headers("部コード,部名,課コード,課名,職員番号,氏名,役職コード,役職"))
                .unwrap();
        assert_eq!(
            schema.levels,
            vec![
                OrgLevel {
                    code_idx: 0,
                    name_idx: 1
                },
                OrgLevel {
                    code_idx: 2,
                    name_idx: 3
                },
            ]
        );
        assert_eq!(schema.fixed.employee_number, 4);
        assert_eq!(schema.fixed.name, 5);
        assert_eq!(schema.fixed.position_code, 6);
        assert_eq!(schema.fixed.position_title, 7);
        assert_eq!(schema.expected_width(), 8);
    }

    #[test]
    fn test_dangling_column_dropped() {
        let levels = org_levels(&headers("部コード,部名,課コード,職員番号,氏名,役職コード,役職"));
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name_idx, 1);
    }

    #[test]
    fn test_levels_end_at_employee_number_before_name() {
        // Name precedes number: pairs still run up to the number column.
        let levels = org_levels(&headers("a,b,氏名,c,職員番号,役職コード,役職"));
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].code_idx, 2);
    }

    #[test]
    fn test_levels_fall_back_to_name_column() {
        let levels = org_levels(&headers("a,b,c,d,氏名"));
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_no_org_columns() {
        let schema = resolve_schema(&headers("職員番号,氏名,役職コード,役職")).unwrap();
        assert!(schema.levels.is_empty());
    }

    #[test]
    fn test_missing_columns_reported() {
        let err = resolve_schema(&headers("部コード,部名,氏名,役職")).unwrap_err();
        assert_eq!(
            err,
            RosterError::MissingColumns {
                missing: vec![EMPLOYEE_NUMBER_LABEL.into(), POSITION_CODE_LABEL.into()],
            }
        );
        assert!(err.to_string().contains("職員番号"));
    }

    #[test]
    fn test_labels_match_exactly() {
        // "役職名" is not "役職".
        let err = resolve_schema(&headers("職員番号,氏名,役職コード,役職名")).unwrap_err();
        assert_eq!(
            err,
            RosterError::MissingColumns {
                missing: vec![POSITION_TITLE_LABEL.into()],
            }
        );
    }
}
