use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::core::errors::TimeEntryError;
use crate::modules::time_entries::core::normalizer::parse_zone;
use crate::modules::time_entries::core::time_entry_view::TimeEntryView;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntryBody {
    pub employee_id: i64,
    pub project_id: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    pub user_time_zone: String,
}

impl TryFrom<CreateTimeEntryBody> for TimeEntryView {
    type Error = TimeEntryError;

    fn try_from(body: CreateTimeEntryBody) -> Result<Self, Self::Error> {
        Ok(TimeEntryView {
            id: None,
            employee_id: body.employee_id,
            project_id: body.project_id,
            user_time_zone: parse_zone(&body.user_time_zone)?,
            start_time: body.start_time.parse()?,
            end_time: body.end_time.parse()?,
            description: body.description,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let view = match TimeEntryView::try_from(body) {
        Ok(view) => view,
        Err(e) => return e.into_response(),
    };

    match state.create_handler.handle(view).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => e.into_response(),
    }
}
