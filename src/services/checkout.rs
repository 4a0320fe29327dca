//! Checkout-redirect URL construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The payment endpoint never talks to the payment processor. It only
//! assembles a hosted-checkout redirect URL from the request fields and a
//! fixed parameter set; completing (or abandoning) the payment is between
//! the buyer and the processor.

use serde::{Deserialize, Serialize};

use crate::state::ServerConfig;

/// Error text for the 400 response when required fields are absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: amount, currency, description";

/// Incoming checkout request. All fields are optional at the wire level;
/// `amount`, `currency`, and `description` are enforced by [`CheckoutRequest::into_order`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutRequest {
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "returnUrl")]
    pub return_url: Option<String>,
    #[serde(rename = "cancelUrl")]
    pub cancel_url: Option<String>,
}

/// A checkout request with the required fields proven present.
#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub return_url: String,
    pub cancel_url: String,
}

fn required(value: Option<String>) -> Option<String> {
    // Absent and empty both count as missing; whitespace-only does not.
    value.filter(|v| !v.is_empty())
}

impl CheckoutRequest {
    /// Validate the required fields, returning `None` if any of `amount`,
    /// `currency`, or `description` is absent or empty.
    #[must_use]
    pub fn into_order(self) -> Option<CheckoutOrder> {
        Some(CheckoutOrder {
            amount: required(self.amount)?,
            currency: required(self.currency)?,
            description: required(self.description)?,
            return_url: self.return_url.unwrap_or_default(),
            cancel_url: self.cancel_url.unwrap_or_default(),
        })
    }
}

/// Successful checkout response: the redirect URL plus the echoed input.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(rename = "paymentUrl")]
    pub payment_url: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    #[serde(rename = "businessEmail")]
    pub business_email: String,
}

/// Build the hosted-checkout redirect URL for an order.
///
/// Parameter set and order are fixed by the processor's Buy Now button
/// contract; every value is percent-encoded.
#[must_use]
pub fn payment_url(config: &ServerConfig, order: &CheckoutOrder) -> String {
    let params: [(&str, &str); 10] = [
        ("cmd", "_xclick"),
        ("business", &config.business_email),
        ("currency_code", &order.currency),
        ("amount", &order.amount),
        ("item_name", &order.description),
        ("return", &order.return_url),
        ("cancel_return", &order.cancel_url),
        ("no_shipping", "1"),
        ("no_note", "1"),
        ("bn", "PP-BuyNowBF:btn_buynowCC_LG.gif:NonHostedGuest"),
    ];

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{query}", config.paypal_base_url)
}

#[cfg(test)]
#[path = "checkout_test.rs"]
mod tests;
