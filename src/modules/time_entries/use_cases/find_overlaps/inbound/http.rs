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
pub struct OverlapsParams {
    pub employee_id: i64,
    pub start: String,
    pub end: String,
    pub time_zone: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<OverlapsParams>,
) -> impl IntoResponse {
    let zone = match parse_zone(&params.time_zone) {
        Ok(zone) => zone,
        Err(e) => return e.into_response(),
    };

    let range = match state.boundary_format.parse_range(&params.start, &params.end, zone) {
        Ok(range) => range,
        Err(e) => return e.into_response(),
    };

    match state.overlaps_handler.handle(params.employee_id, range, zone).await {
        Ok(overlaps) => (StatusCode::OK, Json(overlaps)).into_response(),
        Err(e) => e.into_response(),
    }
}
