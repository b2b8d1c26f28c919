use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::error::ScaleError;

impl ScaleError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScaleError::FoodNotFound(_) => StatusCode::NOT_FOUND,
            ScaleError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScaleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(%status, error = %self, "request failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
