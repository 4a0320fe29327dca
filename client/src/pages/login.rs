//! Login page: email + password against the auth provider.

use leptos::prelude::*;

use crate::net::events::AuthEvents;
#[cfg(feature = "hydrate")]
use crate::net::events::AuthEvent;
use crate::state::page::PageState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let events = expect_context::<AuthEvents>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::provider::sign_in_with_password(&email_value, &password_value).await {
                    Ok(session) => {
                        events.emit(&AuthEvent::SignedIn { session });
                        page.update(|p| p.navigate("home", None));
                    }
                    Err(e) => {
                        info.set(format!("Sign in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &events;
        }
    };

    view! {
        <section class="page page--login">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <button class="button button--quiet" on:click=move |_| page.update(|p| p.navigate("signup", None))>
                    "Need an account? Sign up"
                </button>
            </div>
        </section>
    }
}
