use super::models::ErrorResponse;
use crate::utils::PasteError;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl IntoResponse for PasteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
