//! End-to-end API flow against an in-memory database

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use zone_server::core::{Config, ServerState};
use zone_server::db::DbService;

async fn test_app() -> (Router, ServerState) {
    let db = DbService::open_in_memory().await.unwrap();
    let state = ServerState::with_db(Config::with_overrides("/tmp/zone-server-test", 0), db);
    let app = zone_server::api::router().with_state(state.clone());
    (app, state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn seed_postcode(state: &ServerState, table: &str, postcode: &str, lat: f64, lng: f64) {
    sqlx::query(&format!(
        "INSERT INTO {table} (postcode, latitude, longitude) VALUES (?, ?, ?)"
    ))
    .bind(postcode)
    .bind(lat)
    .bind(lng)
    .execute(state.pool())
    .await
    .unwrap();
}

/// Closed square over southern England
fn square_ring() -> Value {
    json!([
        [51.0, -1.0],
        [51.0, 0.0],
        [52.0, 0.0],
        [52.0, -1.0],
        [51.0, -1.0]
    ])
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _state) = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn zone_crud_flow() {
    let (app, _state) = test_app().await;

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/api/zones/store-1",
        Some(json!({ "coordinates": square_ring() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["store_id"], "store-1");
    assert_eq!(body["coordinates"].as_array().unwrap().len(), 5);

    // Fetch
    let (status, body) = send(&app, "GET", "/api/zones/store-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coordinates"][0], json!([51.0, -1.0]));

    // Replace
    let (status, body) = send(
        &app,
        "POST",
        "/api/zones/store-1",
        Some(json!({
            "coordinates": [[10.0, 10.0], [10.0, 11.0], [11.0, 11.0], [10.0, 10.0]],
            "radius": 750.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coordinates"].as_array().unwrap().len(), 4);
    assert_eq!(body["radius"], 750.0);

    // Delete, then the zone is gone
    let (status, body) = send(&app, "DELETE", "/api/zones/store-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(&app, "GET", "/api/zones/store-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/zones/store-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn zone_upsert_rejects_bad_rings() {
    let (app, _state) = test_app().await;

    // Unclosed ring
    let (status, body) = send(
        &app,
        "POST",
        "/api/zones/store-1",
        Some(json!({ "coordinates": [[51.0, -1.0], [51.0, 0.0], [52.0, 0.0], [52.0, -1.0]] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // Too few points
    let (status, _) = send(
        &app,
        "POST",
        "/api/zones/store-1",
        Some(json!({ "coordinates": [[51.0, -1.0], [51.0, 0.0], [51.0, -1.0]] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No polygon and no radius fallback
    let (status, _) = send(&app, "POST", "/api/zones/store-1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zone_upsert_derives_circle_from_radius() {
    let (app, _state) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/zones/store-9",
        Some(json!({ "center": [51.5, -0.12], "radius": 2000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let ring = body["coordinates"].as_array().unwrap();
    assert_eq!(ring.len(), 21);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(body["radius"], 2000.0);
}

#[tokio::test]
async fn postcode_lookup() {
    let (app, state) = test_app().await;
    seed_postcode(&state, "uk_postcode", "SW1A1AA", 51.501, -0.1416).await;

    let (status, body) = send(&app, "GET", "/api/postcodes/SW1A1AA?country_prefix=uk", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["latitude"], 51.501);
    assert_eq!(body["longitude"], -0.1416);

    // Wrong partition
    let (status, _) = send(&app, "GET", "/api/postcodes/SW1A1AA?country_prefix=mt", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unsupported prefix never reaches storage
    let (status, _) = send(&app, "GET", "/api/postcodes/SW1A1AA?country_prefix=de", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn point_in_zone_flow() {
    let (app, state) = test_app().await;
    seed_postcode(&state, "uk_postcode", "INSIDE1", 51.5, -0.5).await;
    seed_postcode(&state, "uk_postcode", "OUTSIDE1", 35.9, 14.5).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/zones/store-1",
        Some(json!({ "coordinates": square_ring() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "GET",
        "/api/point-in-zone?store_id=store-1&postcode=INSIDE1&country_prefix=uk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inside"], true);

    let (status, body) = send(
        &app,
        "GET",
        "/api/point-in-zone?store_id=store-1&postcode=OUTSIDE1&country_prefix=uk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inside"], false);

    // Missing postcode and missing zone both report not found
    let (status, _) = send(
        &app,
        "GET",
        "/api/point-in-zone?store_id=store-1&postcode=NOPE&country_prefix=uk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "GET",
        "/api/point-in-zone?store_id=ghost&postcode=INSIDE1&country_prefix=uk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preview_urls() {
    let (app, state) = test_app().await;
    seed_postcode(&state, "uk_postcode", "SW1A1AA", 51.501, -0.1416).await;

    // Marker-only when the store has no zone
    let (status, body) = send(
        &app,
        "GET",
        "/api/preview?postcode=SW1A1AA&country_prefix=uk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let url = body["maps_image_url"].as_str().unwrap();
    assert!(url.contains("zoom=13"));
    assert!(url.contains("markers=color:red%7C51.501,-0.1416"));

    // Zone framing once a zone exists
    let (status, _) = send(
        &app,
        "POST",
        "/api/zones/store-1",
        Some(json!({ "coordinates": square_ring() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "GET",
        "/api/preview?postcode=SW1A1AA&country_prefix=uk&store_id=store-1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let url = body["maps_image_url"].as_str().unwrap();
    assert!(url.contains("center=51.5,-0.5"));
    assert!(url.contains("zoom=8"));
    assert!(url.contains("path=color:blue"));

    // Unknown postcode and no zone
    let (status, _) = send(
        &app,
        "GET",
        "/api/preview?postcode=NOPE&country_prefix=uk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
