//! Auth-provider REST client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` plus session
//! persistence in browser storage. Server-side (SSR): stubs returning
//! `None`/error since auth is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session
//! checks degrade to the signed-out state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use crate::net::types::ProviderSession;
use crate::net::types::ProviderUser;

/// Browser storage key holding the provider session JSON.
pub const SESSION_STORAGE_KEY: &str = "lmnts.auth.session";

const DEFAULT_AUTH_BASE: &str = "https://auth.9lmnts.com/auth/v1";

/// Auth service base URL; overridable at build time.
#[must_use]
pub fn auth_base_url() -> String {
    option_env!("AUTH_BASE_URL").unwrap_or(DEFAULT_AUTH_BASE).to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_endpoint(base: &str) -> String {
    format!("{base}/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failed_message(status: u16) -> String {
    format!("signup failed: {status}")
}

/// Parse a stored session, discarding corrupt or expired entries.
#[must_use]
pub fn parse_stored_session(raw: &str, now_unix: i64) -> Option<ProviderSession> {
    let session: ProviderSession = serde_json::from_str(raw).ok()?;
    if session.access_token.is_empty() {
        return None;
    }
    match session.expires_at {
        Some(expires_at) if expires_at <= now_unix => None,
        _ => Some(session),
    }
}

#[cfg(feature = "hydrate")]
fn now_unix() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (js_sys::Date::now() / 1000.0) as i64;
    seconds
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist a session so later visits can restore it.
#[cfg(feature = "hydrate")]
pub fn store_session(session: &ProviderSession) {
    if let Some(storage) = storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
        }
    }
}

/// Drop the persisted session, if any.
#[cfg(feature = "hydrate")]
pub fn clear_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

/// Restore the current session, if a valid one is persisted.
pub async fn get_session() -> Option<ProviderSession> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        parse_stored_session(&raw, now_unix())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch user details for an access token. Returns `None` when the token
/// is rejected or the request fails; callers treat that as an invalid
/// session.
pub async fn get_user(access_token: &str) -> Option<ProviderUser> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_endpoint(&auth_base_url());
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProviderUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        None
    }
}

/// Exchange email/password credentials for a session and persist it.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<ProviderSession, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = password_grant_endpoint(&auth_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        let session: ProviderSession = resp.json().await.map_err(|e| e.to_string())?;
        store_session(&session);
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account, attaching the display name as profile metadata.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(&auth_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": { "name": name }
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(signup_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// End the session: best-effort provider logout, then drop the persisted
/// session. Never fails; sign-out must always succeed locally.
pub async fn sign_out(access_token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = access_token {
            let url = logout_endpoint(&auth_base_url());
            let _ = gloo_net::http::Request::post(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
        clear_session();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
    }
}
