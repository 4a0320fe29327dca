//! About page: who the studio is.

use leptos::prelude::*;

use crate::state::page::PageState;

#[component]
pub fn AboutPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="page page--about">
            <h1 class="page__title">"About LMNTS"</h1>
            <p class="page__lede">
                "We are a small studio of designers and engineers who build together. No handoffs between agencies, no deck-only deliverables."
            </p>
            <p class="page__body">
                "Every engagement pairs one designer with one engineer from the first call. That pairing stays on your project through launch, which is why our estimates hold and our handovers are short."
            </p>
            <div class="page__actions">
                <button class="button" on:click=move |_| page.update(|p| p.navigate("portfolio", None))>
                    "See our work"
                </button>
            </div>
        </section>
    }
}
