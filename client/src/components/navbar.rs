//! Top navigation bar with gate-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link visibility uses the same predicates as the view router, so the
//! chrome never advertises a page the router would bounce.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::events::{AuthEvent, AuthEvents};
use crate::state::auth::AuthState;
use crate::state::page::{Page, PageState};
use crate::util::auth::can_view;

/// Links always present in the primary nav.
pub(crate) const PRIMARY_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("pricing", "Pricing"),
    ("about", "About"),
    ("portfolio", "Portfolio"),
];

/// Account-area links for the current auth state.
#[must_use]
pub(crate) fn account_links(auth: &AuthState) -> Vec<(&'static str, &'static str)> {
    let user = auth.user.as_ref();
    let mut links = Vec::new();
    if can_view(&Page::ClientPortal, user) {
        links.push(("client-portal", "Client Portal"));
    }
    if can_view(&Page::Admin, user) {
        links.push(("admin", "Admin"));
        links.push(("crm", "CRM"));
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = expect_context::<RwSignal<PageState>>();
    let events = expect_context::<AuthEvents>();

    let account_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    let sign_out_events = events.clone();
    let on_sign_out = move |_| {
        let token = auth.get_untracked().access_token;
        #[cfg(feature = "hydrate")]
        {
            let events = sign_out_events.clone();
            leptos::task::spawn_local(async move {
                crate::net::provider::sign_out(token.as_deref()).await;
                events.emit(&AuthEvent::SignedOut);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            sign_out_events.emit(&AuthEvent::SignedOut);
        }
    };

    view! {
        <header class="navbar">
            <button class="navbar__brand" on:click=move |_| page.update(|p| p.navigate("home", None))>
                "LMNTS"
            </button>
            <nav class="navbar__links">
                {PRIMARY_LINKS
                    .iter()
                    .map(|(name, label)| {
                        let name = *name;
                        view! {
                            <button
                                class="navbar__link"
                                class=("navbar__link--active", move || page.get().current.as_name() == name)
                                on:click=move |_| page.update(|p| p.navigate(name, None))
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
                {move || {
                    account_links(&auth.get())
                        .into_iter()
                        .map(|(name, label)| {
                            view! {
                                <button
                                    class="navbar__link"
                                    on:click=move |_| page.update(|p| p.navigate(name, None))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="navbar__account">
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=move || {
                        view! {
                            <button
                                class="navbar__link"
                                on:click=move |_| page.update(|p| p.navigate("login", None))
                            >
                                "Sign in"
                            </button>
                            <button
                                class="button button--primary"
                                on:click=move |_| page.update(|p| p.navigate("start-project", None))
                            >
                                "Start a project"
                            </button>
                        }
                    }
                >
                    <span class="navbar__user">{account_name}</span>
                    <button class="navbar__link" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
