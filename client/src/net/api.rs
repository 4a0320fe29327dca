//! REST helpers for the site's own glue endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning errors since these endpoints are only called
//! from browser interactions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn checkout_failed_message(status: u16) -> String {
    format!("checkout request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn qr_request_failed_message(status: u16) -> String {
    format!("qr request failed: {status}")
}

/// Checkout response subset the client acts on.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(rename = "paymentUrl")]
    pub payment_url: String,
}

/// QR response subset the client acts on.
#[derive(Clone, Debug, Deserialize)]
pub struct QrResponse {
    pub success: bool,
    #[serde(rename = "qrCode")]
    pub qr_code: String,
}

/// Build the body for `POST /api/payment/process`.
#[must_use]
pub fn checkout_body(
    amount: &str,
    currency: &str,
    description: &str,
    return_url: &str,
    cancel_url: &str,
) -> serde_json::Value {
    serde_json::json!({
        "amount": amount,
        "currency": currency,
        "description": description,
        "returnUrl": return_url,
        "cancelUrl": cancel_url,
    })
}

/// Build the body for `POST /api/qr/generate`.
#[must_use]
pub fn qr_body(event_type: &str, location: &str) -> serde_json::Value {
    serde_json::json!({
        "eventType": event_type,
        "location": location,
    })
}

/// Request a checkout redirect URL from the payment endpoint.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn request_checkout(body: serde_json::Value) -> Result<CheckoutResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/payment/process")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(checkout_failed_message(resp.status()));
        }
        resp.json::<CheckoutResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Request an event QR image URL from the QR endpoint.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn request_event_qr(body: serde_json::Value) -> Result<QrResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/qr/generate")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(qr_request_failed_message(resp.status()));
        }
        resp.json::<QrResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}
