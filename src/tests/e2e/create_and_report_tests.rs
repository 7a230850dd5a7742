use crate::config::AppConfig;
use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntries;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post_entry(body: Value) -> Request<Body> {
    Request::post("/api/time-entries")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn created_entries_show_up_once_in_the_report_for_their_local_day() {
    let app = router(AppState::new(Arc::new(InMemoryTimeEntries::new()), &AppConfig::default()));

    let (status, created) = send(
        &app,
        post_entry(json!({
            "employeeId": 7,
            "projectId": 3,
            "startTime": "2024-03-11T09:00:00-04:00[America/New_York]",
            "endTime": "2024-03-11T10:30:00-04:00[America/New_York]",
            "description": "Sprint planning",
            "userTimeZone": "America/New_York"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    // Same employee, next local day: must stay out of the report.
    let (status, _) = send(
        &app,
        post_entry(json!({
            "employeeId": 7,
            "projectId": 3,
            "startTime": "2024-03-12T00:15:00-04:00[America/New_York]",
            "endTime": "2024-03-12T01:00:00-04:00[America/New_York]",
            "userTimeZone": "America/New_York"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, report) = send(
        &app,
        Request::get("/api/time-entries/report?employeeId=7&from=2024-03-11&to=2024-03-11&timeZone=America/New_York")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = report.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], created["id"]);
    assert_eq!(rows[0]["startTime"], created["startTime"]);
    assert_eq!(rows[0]["endTime"], created["endTime"]);
    assert_eq!(rows[0]["startTime"], "2024-03-11T09:00:00-04:00[America/New_York]");
}

#[tokio::test]
async fn an_entry_created_in_one_zone_is_reported_in_another() {
    let app = router(AppState::new(Arc::new(InMemoryTimeEntries::new()), &AppConfig::default()));

    let (status, _) = send(
        &app,
        post_entry(json!({
            "employeeId": 9,
            "projectId": 1,
            "startTime": "2024-07-01T23:30:00+02:00[Europe/Amsterdam]",
            "endTime": "2024-07-02T00:30:00+02:00[Europe/Amsterdam]",
            "userTimeZone": "Europe/Amsterdam"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // 21:30 UTC on July 1st is 17:30 in New York, still July 1st there.
    let (status, report) = send(
        &app,
        Request::get("/api/time-entries/report?employeeId=9&from=2024-07-01&to=2024-07-01&timeZone=America/New_York")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report.as_array().unwrap().len(), 1);
    assert_eq!(report[0]["startTime"], "2024-07-01T17:30:00-04:00[America/New_York]");
    assert_eq!(report[0]["userTimeZone"], "America/New_York");
}

#[tokio::test]
async fn overlaps_report_entries_that_cross_the_window_edges() {
    let app = router(AppState::new(Arc::new(InMemoryTimeEntries::new()), &AppConfig::default()));

    // Started the evening before, ended inside the requested day.
    let (status, _) = send(
        &app,
        post_entry(json!({
            "employeeId": 4,
            "projectId": 2,
            "startTime": "2024-03-10T22:00:00Z",
            "endTime": "2024-03-11T02:00:00Z",
            "userTimeZone": "UTC"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, report) = send(
        &app,
        Request::get("/api/time-entries/report?employeeId=4&from=2024-03-11&to=2024-03-11&timeZone=UTC")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(report, json!([]));

    let (status, overlaps) = send(
        &app,
        Request::get("/api/time-entries/overlaps?employeeId=4&start=2024-03-11&end=2024-03-11&timeZone=UTC")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(overlaps.as_array().unwrap().len(), 1);
}
