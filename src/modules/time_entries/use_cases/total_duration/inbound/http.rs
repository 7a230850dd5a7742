use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::total_duration::handler::TotalDurationQuery;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalDurationParams {
    pub employee_id: i64,
    pub date: String,
    pub time_zone: String,
    #[serde(rename = "type")]
    pub bucket_type: String,
}

impl From<TotalDurationParams> for TotalDurationQuery {
    fn from(params: TotalDurationParams) -> Self {
        Self {
            employee_id: params.employee_id,
            date: params.date,
            time_zone: params.time_zone,
            bucket_type: params.bucket_type,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TotalDurationParams>,
) -> impl IntoResponse {
    match state.total_duration_handler.handle(params.into()).await {
        Ok(summary) => (StatusCode::OK, summary).into_response(),
        Err(e) => e.into_response(),
    }
}
