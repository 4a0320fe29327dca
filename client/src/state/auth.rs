//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the view router's role gates and by user-aware chrome to
//! coordinate redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::ProviderUser;

/// Access role attached to a user by the auth provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    SuperAdmin,
    #[default]
    User,
}

impl Role {
    /// Parse a provider metadata role string; unknown values are plain users.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "super_admin" => Self::SuperAdmin,
            _ => Self::User,
        }
    }

    /// Staff roles may open the admin dashboard and the CRM.
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

/// Locally derived user record, built from provider user data on session
/// validation or sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    /// Derive the local record from provider data. The display name falls
    /// back from profile metadata to the email to `"User"`; the role
    /// defaults to a plain user when metadata carries none.
    #[must_use]
    pub fn from_provider(provider: &ProviderUser) -> Self {
        let email = provider.email.clone().unwrap_or_default();
        let name = provider
            .user_metadata
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| (!email.is_empty()).then(|| email.clone()))
            .unwrap_or_else(|| "User".to_owned());
        let role = provider.user_metadata.role.as_deref().map_or(Role::User, Role::parse);

        Self { id: provider.id.clone(), email, name, role }
    }
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and latches `false` once the startup session
/// check completes, successfully or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, access_token: None, loading: true }
    }
}
