//! Error types for record store operations.

use thiserror::Error;

/// Errors that can occur during record store operations.
///
/// List, search, and append are total and never produce one of these;
/// only identifier-based operations can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No live record carries the requested identifier.
    #[error("no torrent with id {id}")]
    NotFound {
        /// The identifier that failed to resolve
        id: u32,
    },
}
