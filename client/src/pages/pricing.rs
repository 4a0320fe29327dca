//! Pricing page: plan table feeding the start-project flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting a plan is a navigation carrying the plan id; the
//! start-project page reads it back from the shared page state.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

use crate::state::page::PageState;

pub(crate) struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in USD, formatted the way the checkout expects it.
    pub price: &'static str,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
}

/// The fixed plan lineup shown on the pricing page.
pub(crate) fn pricing_plans() -> [Plan; 3] {
    [
        Plan {
            id: "starter",
            name: "Starter",
            price: "950.00",
            blurb: "A focused sprint for one well-scoped deliverable.",
            features: &["One project track", "Weekly check-in", "Launch support"],
        },
        Plan {
            id: "studio",
            name: "Studio",
            price: "2400.00",
            blurb: "An embedded team across design and build.",
            features: &["Two project tracks", "Dedicated designer", "Priority turnaround"],
        },
        Plan {
            id: "scale",
            name: "Scale",
            price: "5200.00",
            blurb: "Full product partnership with a standing roadmap.",
            features: &["Unlimited tracks", "Product strategy", "On-call engineering"],
        },
    ]
}

/// Look up a plan by id, falling back to the first plan.
pub(crate) fn plan_or_default(id: Option<&str>) -> Plan {
    let plans = pricing_plans();
    let wanted = id.unwrap_or("starter");
    plans
        .into_iter()
        .find(|plan| plan.id == wanted)
        .unwrap_or_else(|| {
            let [starter, ..] = pricing_plans();
            starter
        })
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <section class="page page--pricing">
            <h1 class="page__title">"Pricing"</h1>
            <div class="card-grid">
                {pricing_plans()
                    .into_iter()
                    .map(|plan| {
                        let plan_id = plan.id;
                        view! {
                            <article class="card card--plan">
                                <h2 class="card__title">{plan.name}</h2>
                                <p class="card__price">"$" {plan.price} " / month"</p>
                                <p class="card__body">{plan.blurb}</p>
                                <ul class="card__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <button
                                    class="button button--primary"
                                    on:click=move |_| {
                                        page.update(|p| p.navigate("start-project", Some(plan_id)));
                                    }
                                >
                                    "Choose " {plan.name}
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
