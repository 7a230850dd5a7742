use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::core::normalizer::parse_zone;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    pub employee_id: i64,
    pub from: String,
    pub to: String,
    pub time_zone: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    let zone = match parse_zone(&params.time_zone) {
        Ok(zone) => zone,
        Err(e) => return e.into_response(),
    };

    let range = match state.boundary_format.parse_range(&params.from, &params.to, zone) {
        Ok(range) => range,
        Err(e) => return e.into_response(),
    };

    match state.report_handler.handle(params.employee_id, range, zone).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => e.into_response(),
    }
}
