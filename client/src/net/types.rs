//! Auth-provider wire DTOs.
//!
//! DESIGN
//! ======
//! These types mirror the provider's session and user JSON so serde
//! round-trips stay lossless; the locally derived `User` record lives in
//! `state::auth` and is built from these.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Free-form profile metadata attached to a provider user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMetadata {
    /// Display name, if the user set one at signup.
    pub name: Option<String>,
    /// Role string granted out of band (e.g. `"admin"`, `"super_admin"`).
    pub role: Option<String>,
}

/// A user as returned by the provider's `/user` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// An auth session issued by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSession {
    /// Opaque bearer token for provider and API calls.
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Unix seconds when the access token expires, if known.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}
