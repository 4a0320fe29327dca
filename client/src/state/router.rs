//! View selection with role gates.
//!
//! DESIGN
//! ======
//! `resolve` is a pure function of the current page name and auth state,
//! so gate behavior is testable without a DOM. Gate failures report a
//! forced page alongside the substitute view; the shell applies that
//! redirect while rendering. Gates are evaluated at render time, not at
//! navigation time, so a blocked name can sit in state until it renders.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::state::auth::User;
use crate::state::page::Page;
use crate::util::auth::can_view;

/// Renderable views, one per page plus the loading interstitial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Loading,
    Home,
    Services,
    Pricing,
    About,
    Portfolio,
    StartProject,
    Admin,
    Crm,
    ClientPortal,
    Login,
    Signup,
}

/// Outcome of resolving a page against the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The view to render now.
    pub view: View,
    /// A page-name rewrite the shell must apply (gate redirects only).
    pub forced: Option<Page>,
}

fn show(view: View) -> Resolution {
    Resolution { view, forced: None }
}

fn redirect(view: View, forced: Page) -> Resolution {
    Resolution { view, forced: Some(forced) }
}

/// Pick the view for `page`. While the session check is still running,
/// everything resolves to the interstitial.
#[must_use]
pub fn resolve(page: &Page, loading: bool, user: Option<&User>) -> Resolution {
    if loading {
        return show(View::Loading);
    }

    match page {
        Page::Admin | Page::Crm if !can_view(page, user) => redirect(View::Home, Page::Home),
        Page::ClientPortal if !can_view(page, user) => redirect(View::Login, Page::Login),
        // Unknown names render home but keep the stored name untouched.
        Page::Home | Page::Other(_) => show(View::Home),
        Page::Services => show(View::Services),
        Page::Pricing => show(View::Pricing),
        Page::About => show(View::About),
        Page::Portfolio => show(View::Portfolio),
        Page::StartProject => show(View::StartProject),
        Page::Admin => show(View::Admin),
        Page::Crm => show(View::Crm),
        Page::ClientPortal => show(View::ClientPortal),
        Page::Login => show(View::Login),
        Page::Signup => show(View::Signup),
    }
}
