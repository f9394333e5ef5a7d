//! Data types for torrent metadata records.

use serde::{Deserialize, Serialize};

/// One torrent metadata entry held by the store.
///
/// `id` and `last_modified` are store-assigned: `id` on creation (and
/// immutable thereafter), `last_modified` on every create or update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TorrentRecord {
    /// Positive identifier, unique among live records.
    pub id: u32,
    /// Free-text title identifying the content.
    pub title: String,
    /// Non-negative content size (unit abstracted).
    pub size: f64,
    /// Number of seeders.
    pub seeders: u32,
    /// Number of leechers.
    pub leechers: u32,
    /// Timestamp of the most recent create or update, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "lastModified")]
    pub last_modified: String,
}

/// Creation payload for a new record.
///
/// Identifier and timestamp are never client-supplied; the store assigns
/// both when the draft is appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentDraft {
    /// Free-text title identifying the content.
    pub title: String,
    /// Non-negative content size (unit abstracted).
    pub size: f64,
    /// Number of seeders.
    pub seeders: u32,
    /// Number of leechers.
    pub leechers: u32,
}

/// Partial-update payload targeting an existing record.
///
/// Zero and empty values are sentinels meaning "leave unchanged", so a
/// field cannot legitimately be reset to its zero value through a patch.
/// Kept for wire compatibility; a presence-based design (`Option` per
/// field) is the cleaner future direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentPatch {
    /// Identifier of the record to update. Must match a live record.
    pub id: u32,
    /// Replacement title, or empty to leave unchanged.
    #[serde(default)]
    pub title: String,
    /// Replacement size, or zero to leave unchanged.
    #[serde(default)]
    pub size: f64,
    /// Replacement seeder count, or zero to leave unchanged.
    #[serde(default)]
    pub seeders: u32,
    /// Replacement leecher count, or zero to leave unchanged.
    #[serde(default)]
    pub leechers: u32,
}
