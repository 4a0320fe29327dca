//! Services page: the studio's offer, one card per service line.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::state::page::PageState;

pub(crate) struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
}

/// The fixed service catalog shown on the services page.
pub(crate) fn service_catalog() -> [Service; 6] {
    [
        Service {
            id: "branding",
            name: "Branding & Identity",
            summary: "Naming, visual identity, and brand systems that survive contact with real products.",
        },
        Service {
            id: "web",
            name: "Web Design & Build",
            summary: "Marketing sites and web apps, designed and engineered under one roof.",
        },
        Service {
            id: "mobile",
            name: "Mobile Apps",
            summary: "Native-feeling apps for iOS and Android with a shared backend.",
        },
        Service {
            id: "ecommerce",
            name: "E-commerce",
            summary: "Storefronts, checkout flows, and the operational plumbing behind them.",
        },
        Service {
            id: "seo",
            name: "SEO & Performance",
            summary: "Technical SEO audits and speed work that moves the metrics that matter.",
        },
        Service {
            id: "content",
            name: "Content & Campaigns",
            summary: "Launch content, photography, and campaign assets on a steady cadence.",
        },
    ]
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="page page--services">
            <h1 class="page__title">"Services"</h1>
            <div class="card-grid">
                {service_catalog()
                    .into_iter()
                    .map(|service| {
                        view! {
                            <article class="card">
                                <h2 class="card__title">{service.name}</h2>
                                <p class="card__body">{service.summary}</p>
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
                    "Tell us about your project"
                </button>
                <button class="button" on:click=move |_| page.update(|p| p.navigate("pricing", None))>
                    "See pricing"
                </button>
            </div>
        </section>
    }
}
