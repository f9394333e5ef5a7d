//! The in-memory torrent record store.
//!
//! Holds the canonical ordered sequence of records and implements the CRUD
//! operations over it. Lookups are linear scans, which is fine at this
//! scale; at a larger one the sequence would become an id-to-record map
//! with an auxiliary ordered id list to keep insertion-order iteration.

use chrono::Utc;

use crate::errors::StoreError;
use crate::record::{TorrentDraft, TorrentPatch, TorrentRecord};

/// In-memory store owning the ordered sequence of torrent records.
///
/// Records stay in insertion order; removal compacts the sequence by
/// shifting later records one position earlier, which is observable in
/// every list-returning operation.
///
/// The store performs no internal synchronization. Callers exposing it to
/// concurrent access must serialize all operations behind a single lock
/// (the web layer uses one `tokio::sync::RwLock` for this).
#[derive(Debug, Clone, Default)]
pub struct TorrentStore {
    records: Vec<TorrentRecord>,
}

impl TorrentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with the bundled demo records.
    ///
    /// Useful for development and manual testing without having to upload
    /// records first.
    pub fn seeded() -> Self {
        Self {
            records: demo_records(),
        }
    }

    /// All live records in store order.
    pub fn all(&self) -> &[TorrentRecord] {
        &self.records
    }

    /// Looks up a record by identifier.
    ///
    /// Scans the whole sequence; if duplicate identifiers exist (count-based
    /// id assignment can produce them after deletions), the last match in
    /// store order wins.
    ///
    /// # Errors
    /// - `StoreError::NotFound` - No live record has this identifier
    pub fn find_by_id(&self, id: u32) -> Result<TorrentRecord, StoreError> {
        let mut found = None;

        for record in &self.records {
            if record.id == id {
                found = Some(record);
            }
        }

        found.cloned().ok_or(StoreError::NotFound { id })
    }

    /// Position of the last record with the given identifier, if any.
    fn index_of_id(&self, id: u32) -> Option<usize> {
        let mut selected = None;

        for (index, record) in self.records.iter().enumerate() {
            if record.id == id {
                selected = Some(index);
            }
        }

        selected
    }

    /// All records whose title contains `query` as a case-insensitive
    /// substring, in store order.
    ///
    /// An empty query matches every record. Returns an empty vec, never an
    /// error, when nothing matches.
    pub fn search_by_title(&self, query: &str) -> Vec<TorrentRecord> {
        let needle = query.to_lowercase();

        self.records
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Appends a new record built from the draft and returns it.
    ///
    /// The identifier is assigned as `live_record_count + 1`. This is
    /// count-based, not max-based: after a deletion the next assigned id
    /// can collide with a surviving record's. Changing it would change
    /// observable identifier semantics, so it stays.
    pub fn add(&mut self, draft: TorrentDraft) -> TorrentRecord {
        let record = TorrentRecord {
            id: self.records.len() as u32 + 1,
            title: draft.title,
            size: draft.size,
            seeders: draft.seeders,
            leechers: draft.leechers,
            last_modified: timestamp(),
        };

        tracing::debug!(id = record.id, title = %record.title, "torrent added");
        self.records.push(record.clone());
        record
    }

    /// Applies a partial update to the record matching `patch.id` and
    /// returns the full updated sequence.
    ///
    /// `last_modified` is always refreshed. Each of title, size, seeders,
    /// and leechers is replaced only when the patch carries a non-zero,
    /// non-empty value for it (sentinel merge).
    ///
    /// # Errors
    /// - `StoreError::NotFound` - No live record has `patch.id`
    pub fn update(&mut self, patch: TorrentPatch) -> Result<&[TorrentRecord], StoreError> {
        let index = self
            .index_of_id(patch.id)
            .ok_or(StoreError::NotFound { id: patch.id })?;

        let record = &mut self.records[index];
        record.last_modified = timestamp();

        if patch.size != 0.0 {
            record.size = patch.size;
        }
        if patch.seeders != 0 {
            record.seeders = patch.seeders;
        }
        if patch.leechers != 0 {
            record.leechers = patch.leechers;
        }
        if !patch.title.is_empty() {
            record.title = patch.title;
        }

        tracing::debug!(id = patch.id, "torrent updated");
        Ok(&self.records)
    }

    /// Removes the record with the given identifier and returns the full
    /// updated sequence.
    ///
    /// Later records shift one position earlier, keeping their relative
    /// order.
    ///
    /// # Errors
    /// - `StoreError::NotFound` - No live record has this identifier
    pub fn remove(&mut self, id: u32) -> Result<&[TorrentRecord], StoreError> {
        let index = self.index_of_id(id).ok_or(StoreError::NotFound { id })?;

        let removed = self.records.remove(index);
        tracing::debug!(id = removed.id, title = %removed.title, "torrent removed");
        Ok(&self.records)
    }
}

/// Current UTC time formatted the way records store it.
fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// The demo records the service ships with.
fn demo_records() -> Vec<TorrentRecord> {
    vec![
        TorrentRecord {
            id: 1,
            title: "Riders.of.Justice.2020.DANISH.1080p.US.BluRay.AVC.DTS-HD.MA.5.1-FGT"
                .to_string(),
            size: 22.05,
            seeders: 23,
            leechers: 62,
            last_modified: "2021-08-24 10:01:49".to_string(),
        },
        TorrentRecord {
            id: 2,
            title: "The.Suicide.Squad.2021.1080p.WEBRip.x264-RARBG".to_string(),
            size: 2.52,
            seeders: 7587,
            leechers: 694,
            last_modified: "2021-08-06 02:44:27".to_string(),
        },
        TorrentRecord {
            id: 3,
            title: "The.Green.Knight.2021.1080p.AMZN.WEBRip.DDP5.1.Atmos.x264-NOGRP".to_string(),
            size: 5.96,
            seeders: 3425,
            leechers: 389,
            last_modified: "2021-08-19 09:26:58".to_string(),
        },
        TorrentRecord {
            id: 4,
            title: "Jungle.Cruise.2021.720p.WEB.H264-TIMECUT".to_string(),
            size: 2.16,
            seeders: 1,
            leechers: 1,
            last_modified: "2020-05-11 01:22:28".to_string(),
        },
        TorrentRecord {
            id: 5,
            title: "Lady.Vengeance.2005.KOREAN.2160p.BluRay.REMUX.HEVC.DTS-HD.MA.5.1-FGT"
                .to_string(),
            size: 72.56,
            seeders: 57,
            leechers: 58,
            last_modified: "2021-08-20 17:16:48".to_string(),
        },
    ]
}
