use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::core::errors::TimeEntryError;

impl IntoResponse for TimeEntryError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            tracing::warn!(error = %self, "rejected time entries request");
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self, "time entries storage failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
