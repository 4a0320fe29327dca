//! QR route: wraps the event payload into a QR image URL.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use time::OffsetDateTime;

use crate::error::ApiError;
use crate::services::qr::{self, QrRequest, QrResponse};
use crate::state::AppState;

/// Generic 500 text for this endpoint; detail stays in the logs.
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate QR code";

/// `POST /api/qr/generate` -> QR image URL plus the encoded payload.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<QrRequest>, JsonRejection>,
) -> Result<Json<QrResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::unexpected(GENERATE_FAILED_MESSAGE, e))?;

    let now = OffsetDateTime::now_utc();
    let payload = qr::build_payload(&state.config, request, now)
        .map_err(|e| ApiError::unexpected(GENERATE_FAILED_MESSAGE, e))?;
    let qr_code = qr::qr_image_url(&state.config.qr_image_endpoint, &payload)
        .map_err(|e| ApiError::unexpected(GENERATE_FAILED_MESSAGE, e))?;

    tracing::info!(event_id = %payload.event_id, "qr payload issued");

    Ok(Json(QrResponse { success: true, qr_code, data: payload }))
}

#[cfg(test)]
#[path = "qr_test.rs"]
mod tests;
