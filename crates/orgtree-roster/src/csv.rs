//! Naive CSV splitting for roster exports.
//!
//! Roster files are produced by a spreadsheet export that never quotes fields, so the parser
//! splits on every comma. A field that itself contains a comma will shift the remaining cells of
//! its row to the right. This is a known constraint of the input format and is deliberately not
//! worked around here.

/// A CSV file split into its header row and data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Cells of the first line.
    pub headers: Vec<String>,
    /// Cells of every following line, in file order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Splits raw CSV text into a header row and data rows.
///
/// The whole text is trimmed first so trailing blank lines do not produce empty rows. Every
/// line and every cell is trimmed, which also strips the `\r` of CRLF line endings. Blank lines
/// in the middle of the file are kept as single-cell rows; the tree builder drops them because
/// they carry no org path.
pub fn parse_csv(text: &str) -> RawTable {
    let text = text.trim();
    if text.is_empty() {
        return RawTable::default();
    }

    let mut lines = text.split('\n').map(split_line);
    let headers = lines.next().unwrap_or_default();
    let rows = lines.collect();

    RawTable { headers, rows }
}

/// Splits one line on commas, trimming each cell.
fn split_line(line: &str) -> Vec<String> {
    line.trim()
        .split(',')
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rows() {
        let table = parse_csv("a,b,c\n1,2,3\n4,5,6");
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows, vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let table = parse_csv("a,b\n1,2\n\n\n");
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_cells_trimmed_and_crlf_stripped() {
        let table = parse_csv(" a , b \r\n 1 ,2\r\n");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_quoted_comma_is_not_special() {
        let table = parse_csv("a,b\n\"x,y\",z");
        assert_eq!(table.rows[0], vec!["\"x", "y\"", "z"]);
    }

    #[test]
    fn test_empty_input() {
        let table = parse_csv("  \n ");
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_interior_blank_line_kept() {
        let table = parse_csv("a,b\n1,2\n\n3,4");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[1], vec![""]);
    }

    #[test]
    fn test_header_only() {
        let table = parse_csv("a,b,c");
        assert_eq!(table.headers.len(), 3);
        assert!(table.rows.is_empty());
    }
}
