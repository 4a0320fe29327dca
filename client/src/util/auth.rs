//! Shared role-gate predicates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view router and the navbar must agree on which pages a user may
//! open, so the predicate lives in one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::User;
use crate::state::page::Page;

/// Whether `user` may open `page`. Ungated pages are open to everyone,
/// including anonymous visitors.
#[must_use]
pub fn can_view(page: &Page, user: Option<&User>) -> bool {
    match page {
        Page::Admin | Page::Crm => user.is_some_and(|u| u.role.is_staff()),
        Page::ClientPortal => user.is_some(),
        _ => true,
    }
}
