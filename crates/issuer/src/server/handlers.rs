//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{ErrorResponse, HealthResponse, TokenResponse};
use common::ServiceError;
use tracing::{info, warn};

use super::state::AppState;

/// `GET /` — issue one authorization token.
///
/// The request body, headers, and query string are ignored.
pub async fn issue_token(State(state): State<AppState>) -> Response {
    match state.issuer.issue() {
        Ok(issued) => {
            info!(reference_id = %issued.reference_id, "token issued");
            let body = TokenResponse {
                token: issued.token,
                reference_id: issued.reference_id.into_string(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let err = ServiceError::from(e);
            warn!(error = %err, "token issuance failed");
            error_response(&err)
        }
    }
}

/// `GET /health` — liveness check. Secrets were validated before the
/// listener was bound, so a serving process is always healthy.
pub async fn health() -> Response {
    let body = HealthResponse {
        status: "ok".into(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found(uri: Uri) -> Response {
    error_response(&ServiceError::NotFound(uri.path().to_owned()))
}

/// Render `err` as a JSON [`ErrorResponse`] with its mapped status code.
pub fn error_response(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err))).into_response()
}
