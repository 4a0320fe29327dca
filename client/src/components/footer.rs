//! Site footer with secondary navigation.

use leptos::prelude::*;

use crate::state::page::PageState;

#[component]
pub fn Footer() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <footer class="footer">
            <nav class="footer__links">
                <button class="footer__link" on:click=move |_| page.update(|p| p.navigate("services", None))>
                    "Services"
                </button>
                <button class="footer__link" on:click=move |_| page.update(|p| p.navigate("pricing", None))>
                    "Pricing"
                </button>
                <button class="footer__link" on:click=move |_| page.update(|p| p.navigate("about", None))>
                    "About"
                </button>
                <button class="footer__link" on:click=move |_| page.update(|p| p.navigate("portfolio", None))>
                    "Portfolio"
                </button>
            </nav>
            <p class="footer__note">"LMNTS Studio. All work built in-house."</p>
        </footer>
    }
}
