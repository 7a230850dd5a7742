use crate::config::AppConfig;
use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntries;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::time_entry_view::TimeEntryViewBuilder;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn seeded(entries: &[(&str, &str)], config: &AppConfig) -> Router {
    let repository = InMemoryTimeEntries::new();
    for (start, end) in entries {
        repository
            .insert(TimeEntryViewBuilder::new().start_time(start).end_time(end).build().to_new_entry())
            .await
            .unwrap();
    }
    router(AppState::new(Arc::new(repository), config))
}

#[tokio::test]
async fn sums_every_entry_of_the_local_day() {
    let app = seeded(
        &[
            ("2024-03-11T09:00:00-04:00[America/New_York]", "2024-03-11T10:30:00-04:00[America/New_York]"),
            ("2024-03-11T13:00:00-04:00[America/New_York]", "2024-03-11T14:15:00-04:00[America/New_York]"),
        ],
        &AppConfig::default(),
    )
    .await;

    let (status, body) = get_text(
        &app,
        "/api/time-entries/total-duration?employeeId=7&date=2024-03-11&timeZone=America/New_York&type=day",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Total worked hours: 2 hours 45 minutes");
}

#[tokio::test]
async fn counts_real_elapsed_time_across_the_spring_forward_gap() {
    // 01:30 EST to 03:30 EDT is one hour of work.
    let app = seeded(
        &[("2024-03-10T01:30:00-05:00[America/New_York]", "2024-03-10T03:30:00-04:00[America/New_York]")],
        &AppConfig::default(),
    )
    .await;

    let (status, body) = get_text(
        &app,
        "/api/time-entries/total-duration?employeeId=7&date=2024-03-10&timeZone=America/New_York&type=day",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Total worked hours: 1 hours 0 minutes");
}

#[tokio::test]
async fn the_same_instants_fall_in_different_days_per_zone() {
    // 23:30 to 23:59 in New York is already the next day in Amsterdam.
    let app = seeded(
        &[("2024-07-01T23:30:00-04:00[America/New_York]", "2024-07-01T23:59:00-04:00[America/New_York]")],
        &AppConfig::default(),
    )
    .await;

    let (_, new_york) = get_text(
        &app,
        "/api/time-entries/total-duration?employeeId=7&date=2024-07-01&timeZone=America/New_York&type=day",
    )
    .await;
    let (_, amsterdam) = get_text(
        &app,
        "/api/time-entries/total-duration?employeeId=7&date=2024-07-01&timeZone=Europe/Amsterdam&type=day",
    )
    .await;

    assert_eq!(new_york, "Total worked hours: 0 hours 29 minutes");
    assert_eq!(amsterdam, "Total worked hours: 0 hours 0 minutes");
}

#[tokio::test]
async fn week_buckets_follow_the_configured_week_start() {
    // Sunday 2024-03-17.
    let entries = [("2024-03-17T09:00:00-04:00[America/New_York]", "2024-03-17T11:00:00-04:00[America/New_York]")];
    let uri = "/api/time-entries/total-duration?employeeId=7&date=2024-03-18&timeZone=America/New_York&type=week";

    let monday = seeded(&entries, &AppConfig::default()).await;
    let (_, body) = get_text(&monday, uri).await;
    assert_eq!(body, "Total worked hours: 0 hours 0 minutes");

    let config = AppConfig::from_lookup(|key| (key == "WEEK_START").then(|| "sunday".to_string())).unwrap();
    let sunday = seeded(&entries, &config).await;
    let (_, body) = get_text(&sunday, uri).await;
    assert_eq!(body, "Total worked hours: 2 hours 0 minutes");
}

#[tokio::test]
async fn rejects_an_unknown_bucket_type() {
    let app = seeded(&[], &AppConfig::default()).await;

    let (status, body) = get_text(
        &app,
        "/api/time-entries/total-duration?employeeId=7&date=2024-03-11&timeZone=UTC&type=year",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("invalid duration type"));
}
