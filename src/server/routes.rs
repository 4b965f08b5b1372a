use super::models::{HealthResponse, PasteRequest, PasteResponse};
use super::AppState;
use crate::utils::PasteError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

/// GET only; axum would otherwise answer HEAD from this handler too
pub async fn health(method: Method, State(state): State<AppState>) -> Response {
    if method == Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(HealthResponse::ok(&state.service_name)).into_response()
}

/// Validates the body, then hands the paste to the actor.
///
/// The body is taken raw so that parse failures keep the parser's message.
pub async fn paste(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PasteResponse>, PasteError> {
    let request = PasteRequest::from_body(&body)
        .and_then(PasteRequest::validate)
        .inspect_err(log_failure)?;

    let outcome = state
        .paster
        .paste(request.text, request.delay)
        .await
        .inspect_err(log_failure)?;

    Ok(Json(PasteResponse::new(outcome.length)))
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn log_failure(err: &PasteError) {
    if err.is_client_error() {
        warn!("Rejected paste request: {}", err);
    } else {
        error!("Error: {}", err);
    }
}
