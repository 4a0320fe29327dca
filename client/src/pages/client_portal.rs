//! Client portal: project status plus the event QR generator.
//!
//! The view router guarantees a signed-in user before this renders.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ClientPortalPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Hello, {}.", u.name))
            .unwrap_or_default()
    };

    let qr_url = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Generating QR code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = crate::net::api::qr_body("client-meetup", "https://9lmnts-eventos.vercel.app");
            match crate::net::api::request_event_qr(body).await {
                Ok(resp) => {
                    qr_url.set(Some(resp.qr_code));
                    info.set(String::new());
                }
                Err(e) => info.set(format!("QR generation failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page page--portal">
            <h1 class="page__title">"Client portal"</h1>
            <p class="page__lede">{greeting}</p>
            <article class="card">
                <h2 class="card__title">"Your project"</h2>
                <p class="card__body">
                    "Weekly builds land every Friday. Your next review call is on the calendar invite we sent."
                </p>
            </article>
            <article class="card">
                <h2 class="card__title">"Event check-in QR"</h2>
                <p class="card__body">"Generate a QR code for your next client event."</p>
                <button class="button" disabled=move || busy.get() on:click=on_generate>
                    "Generate QR"
                </button>
                <Show when=move || qr_url.get().is_some()>
                    <img
                        class="card__qr"
                        alt="Event check-in QR code"
                        src=move || qr_url.get().unwrap_or_default()
                    />
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="page__message">{move || info.get()}</p>
                </Show>
            </article>
        </section>
    }
}
