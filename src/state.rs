//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The two glue endpoints are stateless, so the only shared data is the
//! immutable endpoint configuration resolved once at startup.

use std::sync::Arc;

const DEFAULT_PAYPAL_BASE_URL: &str = "https://www.paypal.com/cgi-bin/webscr";
const DEFAULT_BUSINESS_EMAIL: &str = "darnley@9lmnts.com";
const DEFAULT_QR_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const DEFAULT_QR_LOCATION: &str = "https://9lmnts-eventos.vercel.app";

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Endpoint configuration for the checkout and QR builders.
///
/// Every field has a fixed production default and can be overridden per
/// deployment through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Checkout redirect base (`PAYPAL_BASE_URL`).
    pub paypal_base_url: String,
    /// Merchant identity passed as the `business` parameter (`BUSINESS_EMAIL`).
    pub business_email: String,
    /// Third-party QR image endpoint (`QR_IMAGE_ENDPOINT`).
    pub qr_image_endpoint: String,
    /// Default `location` embedded in QR payloads (`QR_DEFAULT_LOCATION`).
    pub qr_default_location: String,
}

impl ServerConfig {
    /// Load from the environment, falling back to the production defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            paypal_base_url: env_or("PAYPAL_BASE_URL", DEFAULT_PAYPAL_BASE_URL),
            business_email: env_or("BUSINESS_EMAIL", DEFAULT_BUSINESS_EMAIL),
            qr_image_endpoint: env_or("QR_IMAGE_ENDPOINT", DEFAULT_QR_IMAGE_ENDPOINT),
            qr_default_location: env_or("QR_DEFAULT_LOCATION", DEFAULT_QR_LOCATION),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            paypal_base_url: DEFAULT_PAYPAL_BASE_URL.to_owned(),
            business_email: DEFAULT_BUSINESS_EMAIL.to_owned(),
            qr_image_endpoint: DEFAULT_QR_IMAGE_ENDPOINT.to_owned(),
            qr_default_location: DEFAULT_QR_LOCATION.to_owned(),
        }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the config is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
