//! Static API documentation served at the root route.

use axum::Json;
use serde_json::{Value, json};

/// `GET /` - enumerates every route, its verb, and required parameters.
///
/// Pure static data, never derived from store state.
pub async fn api_docs() -> Json<Value> {
    Json(json!({
        "/": {
            "method": "GET",
            "text": "Get api methods"
        },
        "/api/torrents": {
            "method": "GET",
            "text": "Get all torrents"
        },
        "/api/torrents/{id}": {
            "method": "GET",
            "text": "Get specific torrent by id",
            "required": "id"
        },
        "/api/torrents/search/{title}": {
            "method": "GET",
            "text": "Search torrents by title",
            "required": "title"
        },
        "POST /api/torrents": {
            "method": "POST",
            "text": "Upload torrent with JSON payload"
        },
        "PUT /api/torrents": {
            "method": "PUT",
            "text": "Update torrent with JSON payload",
            "required": "id"
        },
        "DELETE /api/torrents/{id}": {
            "method": "DELETE",
            "text": "Delete torrent by id",
            "required": "id"
        }
    }))
}
