//! HTTP-level tests: status mapping, cascades and audit history through the router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::Database;
use tempfile::TempDir;
use tower::ServiceExt; // For `oneshot` method

async fn create_test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("tmp");
    let url = format!("sqlite://{}", dir.path().join("api.db").display());

    let db = Database::new(&url).await.expect("open database");
    db.run_migrations().await.expect("run migrations");

    (web::app(db), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
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

async fn seed_venues(app: &Router, count: usize) {
    for i in 1..=count {
        let (status, _) = send(
            app,
            "POST",
            "/api/venues",
            Some(json!({ "name": format!("Arena {i}"), "location": "Paris", "capacity": 1000 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

async fn seed_participant(app: &Router, name: &str, age: i32) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/participants",
        Some(json!({ "name": name, "nationality": "FR", "age": age, "gender": "Male" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["participant_id"].as_i64().unwrap()
}

async fn seed_event(app: &Router, sport: &str, venue_id: i64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/events",
        Some(json!({
            "sport_type": sport,
            "event_date": "2026-03-11",
            "event_time": "15:00:00",
            "venue_id": venue_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _dir) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_event_returns_derived_schedule() {
    let (app, _dir) = create_test_app().await;
    seed_venues(&app, 2).await;

    let event = seed_event(&app, "Boxing", 2).await;

    assert_eq!(event["schedule"]["event_id"], event["event_id"]);
    assert_eq!(event["schedule"]["venue_id"], 2);
    assert_eq!(event["schedule"]["scheduled_date"], "2026-03-11");
    assert_eq!(event["schedule"]["scheduled_time"], "15:00:00");

    let uri = format!("/api/events/{}/schedule", event["event_id"]);
    let (status, live) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(live, event["schedule"]);
}

#[tokio::test]
async fn test_create_event_with_unknown_venue_conflicts() {
    let (app, _dir) = create_test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/events",
        Some(json!({
            "sport_type": "Boxing",
            "event_date": "2026-03-11",
            "event_time": "15:00:00",
            "venue_id": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    let (_, events) = send(&app, "GET", "/api/events", None).await;
    assert_eq!(events, json!([]));
}

#[tokio::test]
async fn test_reschedule_records_history_and_keeps_event() {
    let (app, _dir) = create_test_app().await;
    seed_venues(&app, 6).await;
    let event = seed_event(&app, "Boxing", 2).await;
    let schedule_id = event["schedule"]["schedule_id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/schedules/{schedule_id}"),
        Some(json!({ "scheduled_date": "2026-03-15", "scheduled_time": "17:00:00", "venue_id": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["scheduled_date"], "2026-03-15");
    assert_eq!(updated["venue_id"], 6);

    let (_, original) = send(&app, "GET", &format!("/api/events/{}", event["event_id"]), None).await;
    assert_eq!(original["event_date"], "2026-03-11");
    assert_eq!(original["venue_id"], 2);
    assert_eq!(original["schedule"]["venue_id"], 6);

    let (status, history) = send(
        &app,
        "GET",
        &format!("/api/schedules/{schedule_id}/history"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["old_date"], "2026-03-11");
    assert_eq!(history[0]["old_time"], "15:00:00");
    assert_eq!(history[0]["old_venue_id"], 2);
    assert_eq!(history[0]["new_date"], "2026-03-15");
    assert_eq!(history[0]["new_time"], "17:00:00");
    assert_eq!(history[0]["new_venue_id"], 6);
}

#[tokio::test]
async fn test_reschedule_error_statuses() {
    let (app, _dir) = create_test_app().await;
    seed_venues(&app, 1).await;
    let event = seed_event(&app, "Judo", 1).await;
    let schedule_id = event["schedule"]["schedule_id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        "/api/schedules/999",
        Some(json!({ "scheduled_date": "2026-03-15", "scheduled_time": "17:00:00", "venue_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/schedules/{schedule_id}"),
        Some(json!({ "scheduled_date": "2026-03-15", "scheduled_time": "17:00:00", "venue_id": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, history) = send(
        &app,
        "GET",
        &format!("/api/schedules/{schedule_id}/history"),
        None,
    )
    .await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_participant_age_zero_is_unprocessable() {
    let (app, _dir) = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/participants",
        Some(json!({ "name": "Tiny", "nationality": "FR", "age": 0, "gender": "Female" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Eligibility check failed");

    let (_, participants) = send(&app, "GET", "/api/participants", None).await;
    assert_eq!(participants, json!([]));
}

#[tokio::test]
async fn test_empty_name_is_bad_request() {
    let (app, _dir) = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/participants",
        Some(json!({ "name": "", "nationality": "FR", "age": 20, "gender": "Other" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_enrollment_age_gate() {
    let (app, _dir) = create_test_app().await;
    seed_venues(&app, 1).await;
    let event = seed_event(&app, "Tennis", 1).await;
    let event_id = event["event_id"].as_i64().unwrap();
    let adult = seed_participant(&app, "Adult", 19).await;
    let junior = seed_participant(&app, "Junior", 15).await;
    let uri = format!("/api/events/{event_id}/participants");

    let (status, entry) = send(&app, "POST", &uri, Some(json!({ "participant_id": adult }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry["participant_id"], adult);
    assert_eq!(entry["score"], Value::Null);

    let (status, _) = send(&app, "POST", &uri, Some(json!({ "participant_id": junior }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "POST", &uri, Some(json!({ "participant_id": adult }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, results) = send(&app, "GET", &format!("/api/events/{event_id}/results"), None).await;
    assert_eq!(results.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_record_result_without_score() {
    let (app, _dir) = create_test_app().await;
    seed_venues(&app, 1).await;
    let event = seed_event(&app, "Rugby", 1).await;
    let event_id = event["event_id"].as_i64().unwrap();
    let player = seed_participant(&app, "Prop", 28).await;

    let (status, entry) = send(
        &app,
        "PUT",
        &format!("/api/events/{event_id}/results/{player}"),
        Some(json!({ "score": null, "ranking": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["score"], Value::Null);
    assert_eq!(entry["ranking"], Value::Null);

    let (status, results) =
        send(&app, "GET", &format!("/api/events/{event_id}/results"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results, json!([entry]));
}

#[tokio::test]
async fn test_schedule_listing_by_date() {
    let (app, _dir) = create_test_app().await;
    seed_venues(&app, 1).await;
    seed_event(&app, "Boxing", 1).await;

    let (status, entries) = send(&app, "GET", "/api/schedules?date=2026-03-11", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["sport_type"], "Boxing");
    assert_eq!(entries[0]["venue_name"], "Arena 1");

    let (_, none) = send(&app, "GET", "/api/schedules?date=2026-03-12", None).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let (app, _dir) = create_test_app().await;

    for uri in [
        "/api/venues/1",
        "/api/participants/1",
        "/api/events/1",
        "/api/events/1/results",
        "/api/schedules/1",
        "/api/schedules/1/history",
    ] {
        let (status, _) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_gender_is_rejected() {
    let (app, _dir) = create_test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/participants",
        Some(json!({ "name": "Sam", "nationality": "FR", "age": 30, "gender": "Robot" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (_, participants) = send(&app, "GET", "/api/participants", None).await;
    assert_eq!(participants, json!([]));
}

#[tokio::test]
async fn test_participants_filtered_by_nationality() {
    let (app, _dir) = create_test_app().await;
    seed_participant(&app, "Zoe", 22).await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/participants",
        Some(json!({ "name": "Ken", "nationality": "JP", "age": 24, "gender": "Male" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/api/participants?nationality=JP", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.as_array().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Ken");
}
