//! End-to-end tests for the trails HTTP API.
//!
//! Each test builds a router over a fresh in-memory store and drives it with
//! `tower::ServiceExt::oneshot`, so no server or network is involved.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use trails::{create_router, store::InMemoryTrailStore};
use uuid::Uuid;

fn app() -> Router {
    create_router(InMemoryTrailStore::shared(50))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn moderate_trail() -> Value {
    json!({
        "elevation_gain": 500,
        "distance": 5,
        "terrain": "moderate",
        "units": "imperial",
        "fitness_level": 3
    })
}

#[tokio::test]
async fn test_health_check_sets_request_id() {
    let app = app();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id")
        .to_str()
        .unwrap();
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn test_client_request_id_is_echoed() {
    let app = app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trail-check-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trail-check-42"
    );
}

#[tokio::test]
async fn test_estimate_moderate_trail() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/difficulty", Some(moderate_trail())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "moderate");
    assert_eq!(body["label"], "Moderate");
    assert_eq!(body["breakdown"]["elevation_per_mile"], 100.0);
    assert_eq!(body["breakdown"]["raw_score"], 3);
    assert_eq!(body["breakdown"]["weighted_score"], 4.5);
    assert_eq!(body["estimated_time"]["hours"], 2);
    assert_eq!(body["estimated_time"]["minutes"], 53);
    assert_eq!(body["estimated_time"]["display"], "2 hrs 53 min");
    let score = body["score"].as_f64().unwrap();
    assert!((score - 2.65).abs() < 1e-9);
}

#[tokio::test]
async fn test_estimate_records_history() {
    let app = app();
    let (_, first) = send(&app, Method::POST, "/difficulty", Some(moderate_trail())).await;
    let (_, second) = send(
        &app,
        Method::POST,
        "/difficulty",
        Some(json!({
            "elevation_gain": 1200,
            "distance": 10,
            "terrain": "difficult",
            "units": "metric"
        })),
    )
    .await;

    let (status, history) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["total_count"], 2);
    assert_eq!(history["limit"], 5);
    let items = history["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], second["history_id"]);
    assert_eq!(items[1]["id"], first["history_id"]);
    assert_eq!(items[0]["units"], "metric");
    assert_eq!(items[0]["fitness_level"], 3);
}

#[tokio::test]
async fn test_unknown_terrain_is_rejected() {
    let app = app();
    let mut trail = moderate_trail();
    trail["terrain"] = json!("glacier");

    let (status, body) = send(&app, Method::POST, "/difficulty", Some(trail)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("terrain"));

    let (_, history) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(history["total_count"], 0);
}

#[tokio::test]
async fn test_out_of_range_inputs_are_rejected() {
    let app = app();

    let mut trail = moderate_trail();
    trail["fitness_level"] = json!(6);
    let (status, _) = send(&app, Method::POST, "/difficulty", Some(trail)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut trail = moderate_trail();
    trail["elevation_gain"] = json!(-10);
    let (status, _) = send(&app, Method::POST, "/difficulty", Some(trail)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/difficulty", Some(json!({"distance": 3}))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_zero_distance_trail_is_easy() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/difficulty",
        Some(json!({
            "elevation_gain": 500,
            "distance": 0,
            "terrain": "easy",
            "units": "imperial"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "easy");
    assert_eq!(body["breakdown"]["elevation_per_mile"], 0.0);
}

#[tokio::test]
async fn test_score_endpoint_clamps() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/difficulty/score",
        Some(json!({
            "elevation_gain": 90000,
            "distance": 400,
            "terrain": "very-difficult",
            "units": "imperial"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 10.0);
}

#[tokio::test]
async fn test_reference_lists() {
    let app = app();

    let (status, levels) = send(&app, Method::GET, "/difficulty/levels", None).await;
    assert_eq!(status, StatusCode::OK);
    let levels = levels.as_array().unwrap();
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0]["level"], "easy");
    assert_eq!(levels[4]["level"], "extreme");
    assert_eq!(levels[4]["ordinal"], 4);

    let (_, terrains) = send(&app, Method::GET, "/terrains", None).await;
    let terrains = terrains.as_array().unwrap();
    assert_eq!(terrains.len(), 4);
    assert_eq!(terrains[3]["terrain"], "very-difficult");
    assert_eq!(terrains[3]["factor"], 3.0);
    assert_eq!(terrains[3]["score_weight"], 10.0);
}

#[tokio::test]
async fn test_saved_trail_lifecycle() {
    let app = app();

    let mut request = moderate_trail();
    request["name"] = json!("  Mesa Trail  ");
    let (status, saved) = send(&app, Method::POST, "/trails", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["name"], "Mesa Trail");
    assert_eq!(saved["difficulty"], "moderate");
    let id = saved["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, Method::GET, &format!("/trails/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, saved);

    let (status, deleted) = send(&app, Method::DELETE, &format!("/trails/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, saved);

    let (status, _) = send(&app, Method::GET, &format!("/trails/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, restored) =
        send(&app, Method::POST, "/trails/restore", Some(deleted.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(restored, saved);

    let (status, _) = send(&app, Method::POST, "/trails/restore", Some(deleted)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_restore_recomputes_difficulty() {
    let app = app();
    let mut request = moderate_trail();
    request["name"] = json!("Bear Peak");
    let (_, saved) = send(&app, Method::POST, "/trails", Some(request)).await;
    let id = saved["id"].as_str().unwrap().to_string();
    let (_, mut deleted) = send(&app, Method::DELETE, &format!("/trails/{id}"), None).await;

    deleted["difficulty"] = json!("extreme");
    let (status, restored) = send(&app, Method::POST, "/trails/restore", Some(deleted)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(restored["difficulty"], "moderate");
}

#[tokio::test]
async fn test_saved_trails_pagination() {
    let app = app();
    for i in 0..7 {
        let mut request = moderate_trail();
        request["name"] = json!(format!("Trail {i}"));
        let (status, _) = send(&app, Method::POST, "/trails", Some(request)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, first) = send(&app, Method::GET, "/trails", None).await;
    assert_eq!(first["total_count"], 7);
    assert_eq!(first["items"].as_array().unwrap().len(), 5);

    let (_, second) = send(&app, Method::GET, "/trails?limit=5&offset=5", None).await;
    assert_eq!(second["items"].as_array().unwrap().len(), 2);
    assert_eq!(second["offset"], 5);
}

#[tokio::test]
async fn test_history_delete_and_restore() {
    let app = app();
    let (_, calc) = send(&app, Method::POST, "/difficulty", Some(moderate_trail())).await;
    let id = calc["history_id"].as_str().unwrap().to_string();

    let (status, removed) = send(&app, Method::DELETE, &format!("/history/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, history) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(history["total_count"], 0);

    let (status, _) = send(&app, Method::POST, "/history/restore", Some(removed)).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, history) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(history["items"][0]["id"], id.as_str());
}

#[tokio::test]
async fn test_history_restore_into_full_history_is_rejected() {
    let app = create_router(InMemoryTrailStore::shared(2));
    let (_, oldest) = send(&app, Method::POST, "/difficulty", Some(moderate_trail())).await;
    let (_, middle) = send(&app, Method::POST, "/difficulty", Some(moderate_trail())).await;
    let oldest_id = oldest["history_id"].as_str().unwrap().to_string();

    let (_, removed) = send(
        &app,
        Method::DELETE,
        &format!("/history/{oldest_id}"),
        None,
    )
    .await;
    let (_, newest) = send(&app, Method::POST, "/difficulty", Some(moderate_trail())).await;

    let (status, body) = send(&app, Method::POST, "/history/restore", Some(removed)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains(&oldest_id));

    let (_, history) = send(&app, Method::GET, "/history", None).await;
    assert_eq!(history["total_count"], 2);
    let items = history["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], newest["history_id"]);
    assert_eq!(items[1]["id"], middle["history_id"]);
}

#[tokio::test]
async fn test_unknown_history_entry() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/history/{}", Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let (status, doc) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/difficulty"].is_object());
    assert!(doc["paths"]["/trails/{id}"].is_object());
}
