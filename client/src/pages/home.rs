//! Landing page: hero and primary calls to action.

use leptos::prelude::*;

use crate::state::page::PageState;

#[component]
pub fn HomePage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="page page--home">
            <h1 class="page__title">"Nine elements. One studio."</h1>
            <p class="page__lede">
                "Design, engineering, and growth for brands that ship. We take projects from first sketch to running product."
            </p>
            <div class="page__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| page.update(|p| p.navigate("start-project", None))
                >
                    "Start a project"
                </button>
                <button class="button" on:click=move |_| page.update(|p| p.navigate("services", None))>
                    "Explore services"
                </button>
            </div>
        </section>
    }
}
