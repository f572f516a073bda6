//! Scoring and ranking index entries against a query.
//!
//! Matching is a case-insensitive substring test over a fixed sequence of fields per entry
//! kind. The first field that contains the query decides the score: an exact (whole field)
//! match earns the field's exact weight, any other containment earns its substring weight.
//! Entries that match nothing are left out.
//!
//! | Kind   | Field           | Exact | Substring |
//! |--------|-----------------|-------|-----------|
//! | org    | name            | 100   | 50        |
//! | org    | code            | 90    | 40        |
//! | member | name            | 100   | 60        |
//! | member | employee number | 95    | 45        |
//! | member | position title  | 80    | 35        |
//!
//! Hits are ordered by descending score; ties keep index order.

use serde::Serialize;
use tracing::debug;

use crate::{
    entry::{EntryKind, SearchEntry},
    indexer::SearchIndex,
};

/// Default maximum number of hits returned by a search.
pub const DEFAULT_LIMIT: usize = 10;

/// Entry field a query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    /// Unit name.
    OrgName,
    /// Unit code.
    OrgCode,
    /// Member name.
    MemberName,
    /// Member employee number.
    EmployeeNumber,
    /// Member position title.
    PositionTitle,
}

impl MatchField {
    /// Returns the (exact, substring) weights of this field.
    pub fn weights(self) -> (u32, u32) {
        match self {
            Self::OrgName => (100, 50),
            Self::OrgCode => (90, 40),
            Self::MemberName => (100, 60),
            Self::EmployeeNumber => (95, 45),
            Self::PositionTitle => (80, 35),
        }
    }

    /// Returns a short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::OrgName => "name",
            Self::OrgCode => "code",
            Self::MemberName => "name",
            Self::EmployeeNumber => "number",
            Self::PositionTitle => "title",
        }
    }
}

/// Parameters controlling a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum hits returned. Default: 10.
    pub limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchParams {
    /// Returns params with the given result limit.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

/// One ranked match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    /// The matched entry.
    pub entry: &'a SearchEntry,
    /// Match score from the weight table.
    pub score: u32,
    /// Field that matched.
    pub field: MatchField,
    /// Original (not lowercased) text of the matched field.
    pub match_text: &'a str,
}

/// Scores one entry against a lowercased query.
///
/// Returns `None` when no field contains the query.
pub fn score_entry<'a>(entry: &'a SearchEntry, needle: &str) -> Option<SearchHit<'a>> {
    let fields: Vec<(MatchField, &'a str)> = match (entry.kind, &entry.member) {
        (EntryKind::Member, Some(member)) => vec![
            (MatchField::MemberName, member.name.as_str()),
            (MatchField::EmployeeNumber, member.employee_number.as_str()),
            (MatchField::PositionTitle, member.position_title.as_str()),
        ],
        _ => vec![
            (MatchField::OrgName, entry.org_name.as_str()),
            (MatchField::OrgCode, entry.org_code.as_str()),
        ],
    };

    fields.into_iter().find_map(|(field, text)| {
        let haystack = text.to_lowercase();
        if !haystack.contains(needle) {
            return None;
        }
        let (exact, substring) = field.weights();
        Some(SearchHit {
            entry,
            score: if haystack == needle { exact } else { substring },
            field,
            match_text: text,
        })
    })
}

/// Searches `index` for `query`, returning at most `params.limit` hits.
///
/// The query is matched as given, whitespace included; an empty query returns no hits.
pub fn search<'a>(
    index: &'a SearchIndex,
    query: &str,
    params: &SearchParams,
) -> Vec<SearchHit<'a>> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit<'a>> = index
        .entries()
        .iter()
        .filter_map(|entry| score_entry(entry, &needle))
        .collect();
    let matched = hits.len();

    // sort_by is stable, so equal scores keep index order
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(params.limit);

    debug!(query, matched, returned = hits.len(), "search");
    hits
}
