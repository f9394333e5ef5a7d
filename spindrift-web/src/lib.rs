//! Spindrift Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Pure JSON API server over the in-memory torrent record store. Thin
//! plumbing: handlers decode identifiers and payloads, invoke the store,
//! and translate results and errors into responses.

pub mod error;
pub mod handlers;
pub mod server;

// Re-export main types
pub use error::ApiError;
pub use server::{AppState, ServerConfig, router, run_server};
