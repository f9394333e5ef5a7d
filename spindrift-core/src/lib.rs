//! Spindrift Core - In-memory torrent record store

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Owns the canonical ordered sequence of torrent metadata records and the
//! CRUD operations over it. The store is deliberately simple: linear scans,
//! insertion order, no persistence. Consumers (the web layer) are expected
//! to wrap it in their own mutual-exclusion discipline.

pub mod errors;
pub mod record;
pub mod store;

// Re-export main types
pub use errors::StoreError;
pub use record::{TorrentDraft, TorrentPatch, TorrentRecord};
pub use store::TorrentStore;

/// Convenience type alias for Results with StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;
