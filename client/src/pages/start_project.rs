//! Start-project page: brief form feeding the checkout endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where the pricing selection lands. Submitting asks the server
//! for a hosted-checkout redirect URL and sends the browser there; the
//! server never verifies that the payment completes.

#[cfg(test)]
#[path = "start_project_test.rs"]
mod start_project_test;

use leptos::prelude::*;

use crate::pages::pricing::plan_or_default;
use crate::state::page::PageState;

/// Build the checkout request for the selected plan and project brief.
pub(crate) fn checkout_payload(plan_id: Option<&str>, brief: &str, origin: &str) -> serde_json::Value {
    let plan = plan_or_default(plan_id);
    let brief = brief.trim();
    let description = if brief.is_empty() {
        format!("LMNTS {} plan", plan.name)
    } else {
        format!("LMNTS {} plan ({brief})", plan.name)
    };

    crate::net::api::checkout_body(
        plan.price,
        "USD",
        &description,
        &format!("{origin}/?payment=complete"),
        &format!("{origin}/?payment=cancelled"),
    )
}

#[component]
pub fn StartProjectPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let brief = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let plan_name = move || plan_or_default(page.get().selected_plan.as_deref()).name;
    let plan_price = move || plan_or_default(page.get().selected_plan.as_deref()).price;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Preparing checkout...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let selected = page.get_untracked().selected_plan;
            let brief_text = brief.get_untracked();
            leptos::task::spawn_local(async move {
                let origin = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .unwrap_or_default();
                let payload = checkout_payload(selected.as_deref(), &brief_text, &origin);
                match crate::net::api::request_checkout(payload).await {
                    Ok(resp) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&resp.payment_url);
                        }
                    }
                    Err(e) => {
                        info.set(format!("Checkout failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <section class="page page--start-project">
            <h1 class="page__title">"Start a project"</h1>
            <p class="page__lede">
                "Selected plan: " <strong>{plan_name}</strong> " at $" {plan_price} " per month."
            </p>
            <form class="project-form" on:submit=on_submit>
                <textarea
                    class="project-form__brief"
                    placeholder="Tell us what you want to build..."
                    prop:value=move || brief.get()
                    on:input=move |ev| brief.set(event_target_value(&ev))
                ></textarea>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Continue to checkout"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page__message">{move || info.get()}</p>
            </Show>
            <button class="button button--quiet" on:click=move |_| page.update(|p| p.navigate("pricing", None))>
                "Change plan"
            </button>
        </section>
    }
}
