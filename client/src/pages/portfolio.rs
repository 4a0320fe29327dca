//! Portfolio page: selected shipped work.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::state::page::PageState;

pub(crate) struct PortfolioItem {
    pub client: &'static str,
    pub title: &'static str,
    pub outcome: &'static str,
}

/// The fixed case-study list shown on the portfolio page.
pub(crate) fn portfolio_items() -> [PortfolioItem; 4] {
    [
        PortfolioItem {
            client: "Harbor & Co",
            title: "E-commerce relaunch",
            outcome: "Checkout conversion up 31% in the first quarter.",
        },
        PortfolioItem {
            client: "Fieldnote",
            title: "Mobile companion app",
            outcome: "4.8-star average across both app stores at launch.",
        },
        PortfolioItem {
            client: "Brightline Health",
            title: "Patient portal",
            outcome: "Support call volume halved within two months.",
        },
        PortfolioItem {
            client: "Copperworks",
            title: "Brand system & site",
            outcome: "One identity across print, product, and packaging.",
        },
    ]
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="page page--portfolio">
            <h1 class="page__title">"Selected work"</h1>
            <div class="card-grid">
                {portfolio_items()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <article class="card">
                                <p class="card__eyebrow">{item.client}</p>
                                <h2 class="card__title">{item.title}</h2>
                                <p class="card__body">{item.outcome}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="page__actions">
                <button
                    class="button button--primary"
                    on:click=move |_| page.update(|p| p.navigate("start-project", None))
                >
                    "Start yours"
                </button>
            </div>
        </section>
    }
}
