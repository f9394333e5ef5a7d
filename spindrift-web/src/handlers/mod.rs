//! HTTP request handlers organized by functionality

pub mod api;
pub mod docs;

// Re-export handler functions
pub use api::{
    create_torrent, delete_torrent, get_torrent, list_torrents, search_torrents, update_torrent,
};
pub use docs::api_docs;
