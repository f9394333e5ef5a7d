//! Integration tests driving the real router end to end.

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use spindrift_core::TorrentStore;
use spindrift_web::{AppState, router};
use tower::ServiceExt;

/// Router over the five bundled demo records.
fn seeded_app() -> Router {
    router(AppState::new(TorrentStore::seeded()))
}

/// Router over an empty store.
fn empty_app() -> Router {
    router(AppState::new(TorrentStore::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn docs_root_enumerates_every_route() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let docs = body_json(response).await;
    assert_eq!(docs["/api/torrents"]["method"], "GET");
    assert_eq!(docs["/api/torrents/{id}"]["required"], "id");
    assert_eq!(docs["/api/torrents/search/{title}"]["required"], "title");
    assert_eq!(docs["POST /api/torrents"]["method"], "POST");
    assert_eq!(docs["PUT /api/torrents"]["method"], "PUT");
    assert_eq!(docs["DELETE /api/torrents/{id}"]["method"], "DELETE");
}

#[tokio::test]
async fn list_returns_seeded_records_with_wire_field_names() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/api/torrents", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let records = body_json(response).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 5);

    // The wire shape is exactly the six named fields, camelCase timestamp
    // included.
    let first = records[0].as_object().unwrap();
    for field in ["id", "title", "size", "seeders", "leechers", "lastModified"] {
        assert!(first.contains_key(field), "missing field {field}");
    }
    assert_eq!(first.len(), 6);
    assert_eq!(records[0]["id"], 1);
}

#[tokio::test]
async fn get_torrent_by_id() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/api/torrents/2", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let record = body_json(response).await;
    assert_eq!(record["id"], 2);
    assert_eq!(record["title"], "The.Suicide.Squad.2021.1080p.WEBRip.x264-RARBG");
    assert_eq!(record["seeders"], 7587);
}

#[tokio::test]
async fn get_unknown_id_returns_404_with_message() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/api/torrents/99", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error = body_json(response).await;
    assert_eq!(error["message"], "no torrent with id 99");
}

#[tokio::test]
async fn get_non_numeric_id_returns_400() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/api/torrents/not-a-number", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert!(error["message"].as_str().unwrap().contains("not a valid id"));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/api/torrents/search/WEBRIP", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let hits = body_json(response).await;
    let hits = hits.as_array().unwrap().clone();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["id"], 2);
    assert_eq!(hits[1]["id"], 3);
}

#[tokio::test]
async fn search_with_no_match_returns_empty_list() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/api/torrents/search/zz-no-match", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_assigns_count_based_id_and_timestamp() {
    let app = seeded_app();
    let payload = json!({
        "title": "Dune.2021.1080p.WEBRip.x264",
        "size": 2.4,
        "seeders": 120,
        "leechers": 30
    });
    let response = send(&app, Method::POST, "/api/torrents", Some(payload)).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let record = body_json(response).await;
    assert_eq!(record["id"], 6);
    assert_eq!(record["title"], "Dune.2021.1080p.WEBRip.x264");
    assert_eq!(record["lastModified"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn create_rejects_malformed_body() {
    let app = seeded_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/torrents")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert!(error["message"].is_string());
}

#[tokio::test]
async fn update_merges_only_non_sentinel_fields() {
    let app = seeded_app();
    let response = send(
        &app,
        Method::PUT,
        "/api/torrents",
        Some(json!({ "id": 2, "seeders": 500 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let records = body_json(response).await;
    let updated = &records.as_array().unwrap()[1];
    assert_eq!(updated["id"], 2);
    assert_eq!(updated["seeders"], 500);
    assert_eq!(updated["leechers"], 694);
    assert_eq!(updated["title"], "The.Suicide.Squad.2021.1080p.WEBRip.x264-RARBG");
    assert_ne!(updated["lastModified"], "2021-08-06 02:44:27");
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = seeded_app();
    let response = send(
        &app,
        Method::PUT,
        "/api/torrents",
        Some(json!({ "id": 42, "title": "Renamed" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "no torrent with id 42");
}

#[tokio::test]
async fn update_without_id_returns_400() {
    let app = seeded_app();
    let response = send(
        &app,
        Method::PUT,
        "/api/torrents",
        Some(json!({ "title": "Renamed" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_compacts_and_preserves_order() {
    let app = seeded_app();
    let response = send(&app, Method::DELETE, "/api/torrents/1", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let records = body_json(response).await;
    let records = records.as_array().unwrap().clone();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["id"], 2);
    assert_eq!(records[3]["id"], 5);
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let app = seeded_app();
    let response = send(&app, Method::DELETE, "/api/torrents/77", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The sequence is untouched.
    let list = send(&app, Method::GET, "/api/torrents", None).await;
    assert_eq!(body_json(list).await.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn id_collision_after_delete_is_observable() {
    // Count-based assignment end to end: create Alpha and Beta, delete
    // Alpha, create Gamma. Gamma gets id 2, colliding with Beta, and the
    // last-match-wins lookup resolves id 2 to Gamma.
    let app = empty_app();

    for title in ["Alpha", "Beta"] {
        let response = send(
            &app,
            Method::POST,
            "/api/torrents",
            Some(json!({ "title": title })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, Method::DELETE, "/api/torrents/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        Method::POST,
        "/api/torrents",
        Some(json!({ "title": "Gamma" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 2);

    let response = send(&app, Method::GET, "/api/torrents/2", None).await;
    assert_eq!(body_json(response).await["title"], "Gamma");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = seeded_app();
    let response = send(&app, Method::GET, "/this-route-does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
