use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::time_entries::use_cases::create_time_entry::inbound::http as create_http;
use crate::modules::time_entries::use_cases::find_overlaps::inbound::http as overlaps_http;
use crate::modules::time_entries::use_cases::time_entries_report::inbound::http as report_http;
use crate::modules::time_entries::use_cases::total_duration::inbound::http as total_duration_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/time-entries", post(create_http::handle))
        .route("/api/time-entries/total-duration", get(total_duration_http::handle))
        .route("/api/time-entries/report", get(report_http::handle))
        .route("/api/time-entries/overlaps", get(overlaps_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
