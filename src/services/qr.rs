//! QR payload construction and image-URL encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The QR endpoint does not render images. It fills defaults into the
//! event payload, serializes it as JSON, and embeds it URL-encoded into a
//! third-party image-generation URL the caller fetches directly.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::ServerConfig;

/// Incoming QR request. Every field is optional; defaults are applied by
/// [`build_payload`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QrRequest {
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,
    #[serde(rename = "eventType")]
    pub event_type: Option<String>,
    pub timestamp: Option<String>,
    pub location: Option<String>,
    pub features: Option<Vec<String>>,
}

/// The payload embedded in the generated QR image.
///
/// Field order is the wire order; it is what ends up inside the encoded
/// `data` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub timestamp: String,
    pub location: String,
    pub features: Vec<String>,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
}

/// Successful QR response: the image URL plus the payload it encodes.
#[derive(Debug, Clone, Serialize)]
pub struct QrResponse {
    pub success: bool,
    #[serde(rename = "qrCode")]
    pub qr_code: String,
    pub data: QrPayload,
}

/// Fill defaults into a request, producing the payload for `now`.
///
/// # Errors
///
/// Returns an error if `now` cannot be formatted as RFC 3339.
pub fn build_payload(
    config: &ServerConfig,
    req: QrRequest,
    now: OffsetDateTime,
) -> Result<QrPayload, time::error::Format> {
    let now_text = now.format(&Rfc3339)?;
    let millis = now.unix_timestamp_nanos() / 1_000_000;

    Ok(QrPayload {
        event_id: req.event_id.unwrap_or_else(|| format!("event-{millis}")),
        event_type: req.event_type.unwrap_or_else(|| "unknown".to_owned()),
        timestamp: req.timestamp.unwrap_or_else(|| now_text.clone()),
        location: req.location.unwrap_or_else(|| config.qr_default_location.clone()),
        features: req.features.unwrap_or_default(),
        generated_at: now_text,
    })
}

/// Encode a payload into the third-party QR image URL.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized to JSON.
pub fn qr_image_url(endpoint: &str, payload: &QrPayload) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(payload)?;
    Ok(format!("{endpoint}?size=200x200&data={}", urlencoding::encode(&json)))
}

#[cfg(test)]
#[path = "qr_test.rs"]
mod tests;
