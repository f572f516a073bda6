//! Error types for roster loading.

use thiserror::Error;

/// Errors that stop a roster from being turned into a tree.
///
/// Row-level anomalies (short rows, rows without an org path) are not errors; they are
/// counted in [`BuildReport`](crate::BuildReport) and the batch carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// One or more of the fixed columns is absent from the header row.
    #[error("missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// Labels of every missing column, in canonical column order.
        missing: Vec<String>,
    },
}
