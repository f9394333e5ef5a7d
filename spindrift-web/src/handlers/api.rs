//! CRUD handlers for the torrent record API.
//!
//! Each handler decodes transport-level input (a path segment or JSON
//! body), invokes one store operation, and maps the result onto a JSON
//! response. Decode failures become `ApiError::InvalidInput`, store
//! misses become `ApiError::NotFound`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use spindrift_core::{TorrentDraft, TorrentPatch, TorrentRecord};

use crate::error::ApiError;
use crate::server::AppState;

/// `GET /api/torrents` - every live record in store order.
pub async fn list_torrents(State(state): State<AppState>) -> Json<Vec<TorrentRecord>> {
    let store = state.store.read().await;
    Json(store.all().to_vec())
}

/// `GET /api/torrents/{id}` - one record by identifier.
///
/// # Errors
/// - `ApiError::InvalidInput` - The path segment is not a positive integer
/// - `ApiError::NotFound` - No live record has this identifier
pub async fn get_torrent(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TorrentRecord>, ApiError> {
    let id = parse_id(&raw_id)?;

    let store = state.store.read().await;
    let record = store.find_by_id(id)?;
    Ok(Json(record))
}

/// `GET /api/torrents/search/{title}` - case-insensitive substring search.
///
/// Always succeeds; an empty result list means nothing matched.
pub async fn search_torrents(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<Vec<TorrentRecord>> {
    let store = state.store.read().await;
    Json(store.search_by_title(&title))
}

/// `POST /api/torrents` - append a new record built from the body.
///
/// The store assigns the identifier and timestamp; any client-supplied
/// values for them are not part of the draft shape and are ignored.
///
/// # Errors
/// - `ApiError::InvalidInput` - The body is not a valid draft payload
pub async fn create_torrent(
    State(state): State<AppState>,
    payload: Result<Json<TorrentDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<TorrentRecord>), ApiError> {
    let Json(draft) = payload.map_err(invalid_body)?;

    let mut store = state.store.write().await;
    let record = store.add(draft);
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /api/torrents` - partial update of the record matching `body.id`.
///
/// Zero and empty fields in the body mean "leave unchanged". Responds
/// with the full updated record list.
///
/// # Errors
/// - `ApiError::InvalidInput` - The body is not a valid patch payload
/// - `ApiError::NotFound` - No live record has the patch's identifier
pub async fn update_torrent(
    State(state): State<AppState>,
    payload: Result<Json<TorrentPatch>, JsonRejection>,
) -> Result<Json<Vec<TorrentRecord>>, ApiError> {
    let Json(patch) = payload.map_err(invalid_body)?;

    let mut store = state.store.write().await;
    let records = store.update(patch)?;
    Ok(Json(records.to_vec()))
}

/// `DELETE /api/torrents/{id}` - remove one record, compacting the
/// sequence. Responds with the full updated record list.
///
/// # Errors
/// - `ApiError::InvalidInput` - The path segment is not a positive integer
/// - `ApiError::NotFound` - No live record has this identifier
pub async fn delete_torrent(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<TorrentRecord>>, ApiError> {
    let id = parse_id(&raw_id)?;

    let mut store = state.store.write().await;
    let records = store.remove(id)?;
    Ok(Json(records.to_vec()))
}

/// Decodes an identifier path segment.
fn parse_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse::<u32>().map_err(|_| ApiError::invalid_id(raw))
}

/// Maps a JSON extractor rejection onto the API's error shape.
fn invalid_body(rejection: JsonRejection) -> ApiError {
    ApiError::InvalidInput {
        reason: rejection.body_text(),
    }
}
