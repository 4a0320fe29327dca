//! Admin dashboard: staff-only overview.
//!
//! The role gate lives in the view router; by the time this renders, the
//! current user is staff.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::page::PageState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = expect_context::<RwSignal<PageState>>();

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}.", u.name))
            .unwrap_or_default()
    };

    view! {
        <section class="page page--admin">
            <h1 class="page__title">"Admin dashboard"</h1>
            <p class="page__lede">{greeting}</p>
            <div class="stat-grid">
                <div class="stat">
                    <p class="stat__value">"7"</p>
                    <p class="stat__label">"Active projects"</p>
                </div>
                <div class="stat">
                    <p class="stat__value">"3"</p>
                    <p class="stat__label">"Open invoices"</p>
                </div>
                <div class="stat">
                    <p class="stat__value">"12"</p>
                    <p class="stat__label">"Leads this month"</p>
                </div>
            </div>
            <div class="page__actions">
                <button class="button button--primary" on:click=move |_| page.update(|p| p.navigate("crm", None))>
                    "Open CRM"
                </button>
            </div>
        </section>
    }
}
