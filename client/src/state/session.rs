//! Session bootstrap and auth-event transitions.
//!
//! ARCHITECTURE
//! ============
//! Every state change is a pure function over pre-fetched provider data;
//! the shell's async wiring only decides which one to apply. Session
//! failures never surface to the visitor: they log and land in the
//! signed-out state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{ProviderSession, ProviderUser};
use crate::state::auth::{AuthState, User};
use crate::state::page::{Page, PageState};

/// Outcome of the startup session check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bootstrap {
    /// No stored session; start signed out.
    NoSession,
    /// A session existed but user details could not be fetched; the
    /// session is treated as invalid and discarded.
    Invalid,
    /// A validated session.
    SignedIn {
        user: ProviderUser,
        access_token: String,
    },
}

/// Classify the bootstrap fetches. `user` is whatever the user-details
/// request produced for the stored session, if one existed.
#[must_use]
pub fn evaluate_bootstrap(session: Option<ProviderSession>, user: Option<ProviderUser>) -> Bootstrap {
    match (session, user) {
        (None, _) => Bootstrap::NoSession,
        (Some(_), None) => Bootstrap::Invalid,
        (Some(session), Some(user)) => Bootstrap::SignedIn { user, access_token: session.access_token },
    }
}

/// Apply the bootstrap outcome. Always completes the loading flag so the
/// interstitial cannot outlive the session check.
pub fn apply_bootstrap(auth: &mut AuthState, outcome: Bootstrap) {
    match outcome {
        Bootstrap::NoSession => log::info!("no existing session found"),
        Bootstrap::Invalid => log::warn!("session validation failed; continuing signed out"),
        Bootstrap::SignedIn { user, access_token } => {
            auth.user = Some(User::from_provider(&user));
            auth.access_token = Some(access_token);
        }
    }
    auth.loading = false;
}

/// Install the signed-in user after a `SignedIn` event's user fetch.
/// Page state is deliberately untouched.
pub fn apply_signed_in(auth: &mut AuthState, user: &ProviderUser, access_token: &str) {
    auth.user = Some(User::from_provider(user));
    auth.access_token = Some(access_token.to_owned());
}

/// Clear the session and send the shell back to the home page.
pub fn apply_signed_out(auth: &mut AuthState, page: &mut PageState) {
    auth.user = None;
    auth.access_token = None;
    page.current = Page::Home;
}
