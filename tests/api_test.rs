mod common;

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use common::{lesson, room, views_at};
use roomfinder::api::router;
use roomfinder::repository::Snapshot;
use roomfinder::state::AppState;

fn app() -> axum::Router {
    let snapshot = Snapshot::new(
        vec![
            room(1, "101", "Main Building"),
            room(2, "102", "Main Building"),
            room(3, "G1", "Green Hall"),
        ],
        vec![
            lesson(1, 2, "09:30", "10:20"),
            lesson(1, 2, "09:45", "10:35"),
        ],
    );
    // Tuesday 2026-10-13 09:40
    let views = views_at(snapshot, 2026, 10, 13, 9, 40);
    router(AppState {
        views: Arc::new(views),
    })
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, _) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_with_explicit_params() {
    let (status, body) = get("/rooms?day=2&time=09:35&building=main").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["day"], 2);
    assert_eq!(body["day_name"], "Tuesday");
    assert_eq!(body["time"], "09:35");
    let rooms = body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], 2);
    assert_eq!(rooms[0]["building"], "Main Building");
}

#[tokio::test]
async fn test_listing_defaults_to_now() {
    let (status, body) = get("/rooms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["day"], 2);
    assert_eq!(body["time"], "10:30");
    assert_eq!(body["rooms"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_listing_rejects_bad_params() {
    let (status, body) = get("/rooms?day=9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("day"));

    let (status, _) = get("/rooms?time=noon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reference_data() {
    let (_, buildings) = get("/rooms/buildings").await;
    assert_eq!(buildings, serde_json::json!(["Green Hall", "Main Building"]));

    let (_, slots) = get("/rooms/slots").await;
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 14);
    assert_eq!(slots[0]["start"], "08:30");
    assert_eq!(slots[13]["end"], "22:20");

    let (_, days) = get("/rooms/days").await;
    assert_eq!(days.as_array().unwrap().len(), 6);
    assert_eq!(days[0]["name"], "Monday");
}

#[tokio::test]
async fn test_search_views() {
    let (_, full) = get("/rooms/search?q=green").await;
    assert_eq!(full.as_array().unwrap().len(), 1);

    let (_, blank) = get("/rooms/search?q=").await;
    assert!(blank.as_array().unwrap().is_empty());

    let (_, short) = get("/rooms/api/search?q=1").await;
    assert!(short.as_array().unwrap().is_empty());

    let (_, compact) = get("/rooms/api/search?q=10").await;
    let compact = compact.as_array().unwrap();
    assert_eq!(compact.len(), 2);
    assert_eq!(compact[0], serde_json::json!({"id": 1, "name": "101", "building": "Main Building"}));
}

#[tokio::test]
async fn test_current_and_next() {
    let (_, now) = get("/rooms/current").await;
    assert_eq!(now["is_weekend"], false);
    assert_eq!(now["day_name"], "Tuesday");
    assert_eq!(now["time"], "09:40");
    assert_eq!(now["rooms"].as_array().unwrap().len(), 2);

    let (_, next) = get("/rooms/next?building=green").await;
    assert_eq!(next["day"], 2);
    assert_eq!(next["time"], "10:30");
    assert_eq!(next["rooms"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_room_views() {
    let (status, room) = get("/rooms/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["name"], "101");

    let (status, grid) = get("/rooms/1/schedule").await;
    assert_eq!(status, StatusCode::OK);
    let rows = grid["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 14);
    // Tuesday column of the 09:30 row
    assert_eq!(rows[1]["cells"][1]["lesson"]["start_time"], "09:30");
    assert!(rows[1]["cells"][0]["lesson"].is_null());

    // the off-period lesson only shows up in the flat listing
    let (_, lessons) = get("/rooms/1/lessons").await;
    assert_eq!(lessons.as_array().unwrap().len(), 2);

    let (_, days) = get("/rooms/1/days").await;
    assert_eq!(days[1]["lessons"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_room_is_404() {
    for uri in ["/rooms/99", "/rooms/99/schedule", "/rooms/99/lessons", "/rooms/99/days", "/rooms/99/free?day=1&time=08:30"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["message"], "Not Found");
    }
}

#[tokio::test]
async fn test_room_free_endpoint() {
    let (_, busy) = get("/rooms/1/free?day=2&time=09:50").await;
    assert_eq!(busy["free"], false);
    assert_eq!(busy["time"], "09:50");

    let (_, late) = get("/rooms/1/free?day=2&time=23:00").await;
    assert_eq!(late["free"], true);

    let (status, _) = get("/rooms/1/free?day=0&time=09:50").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
