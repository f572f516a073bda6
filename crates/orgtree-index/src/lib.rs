//! Search index and query engine for orgtree.
//!
//! This crate turns an aggregated organization tree into a flat list of searchable entries and
//! ranks them against free-text queries:
//! - Pre-order flattening of units and their members into [`SearchEntry`] values
//! - Weighted case-insensitive substring scoring with a top-K cut
//! - A [`Session`] that owns the current tree and index and replaces them together
//! - JSON [`Snapshot`]s of a loaded session
//!
//! # Example
//!
//! ```
//! use orgtree_index::{SearchParams, Session};
//!
//! let mut session = Session::default();
//! session
//!     .load_csv("部コード,部名,職員番号,氏名,役職コード,役職\n10,総務部,1001,山田太郎,50,部長")
//!     .unwrap();
//! let hits = session.search("山田", &SearchParams::default());
//! assert_eq!(hits[0].match_text, "山田太郎");
//! assert_eq!(hits[0].score, 60);
//! ```

#![warn(missing_docs)]

mod entry;
mod error;
mod indexer;
mod search;
mod session;
mod snapshot;

pub use entry::{EntryKind, SearchEntry};
pub use error::IndexError;
pub use indexer::SearchIndex;
pub use search::{DEFAULT_LIMIT, MatchField, SearchHit, SearchParams, score_entry, search};
pub use session::Session;
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};

/// Builds the search index for `tree`.
pub fn build_index(tree: &orgtree_roster::OrgTree) -> SearchIndex {
    SearchIndex::build(tree)
}
