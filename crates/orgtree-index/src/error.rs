//! Error types for the orgtree-index crate.

use orgtree_roster::RosterError;
use thiserror::Error;

/// Errors that can occur when loading, indexing or exporting a roster.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The roster could not be turned into a tree.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A snapshot could not be serialized or deserialized.
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A snapshot was written by an incompatible version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion {
        /// Version found in the snapshot.
        found: u32,
        /// Version this build reads and writes.
        expected: u32,
    },

    /// The session has no roster loaded.
    #[error("no roster loaded")]
    NoRoster,
}
