//! Payment route: builds the hosted-checkout redirect URL.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::error::ApiError;
use crate::services::checkout::{self, CheckoutRequest, CheckoutResponse};
use crate::state::AppState;

/// Generic 500 text for this endpoint; detail stays in the logs.
pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process payment";

/// `POST /api/payment/process` -> checkout redirect URL with echoed input.
pub async fn process(
    State(state): State<AppState>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::unexpected(PROCESS_FAILED_MESSAGE, e))?;

    let Some(order) = request.into_order() else {
        return Err(ApiError::Validation(checkout::MISSING_FIELDS_MESSAGE.to_owned()));
    };

    let payment_url = checkout::payment_url(&state.config, &order);
    tracing::info!(amount = %order.amount, currency = %order.currency, "checkout redirect issued");

    Ok(Json(CheckoutResponse {
        success: true,
        payment_url,
        amount: order.amount,
        currency: order.currency,
        description: order.description,
        business_email: state.config.business_email.clone(),
    }))
}

#[cfg(test)]
#[path = "payment_test.rs"]
mod tests;
