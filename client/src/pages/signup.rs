//! Signup page: account creation against the auth provider.

use leptos::prelude::*;

use crate::state::page::PageState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter at least an email and a password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::provider::sign_up(&name_value, &email_value, &password_value).await {
                Ok(()) => {
                    page.update(|p| p.navigate("login", None));
                }
                Err(e) => {
                    info.set(format!("Signup failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name_value;
        }
    };

    view! {
        <section class="page page--signup">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <button class="button button--quiet" on:click=move |_| page.update(|p| p.navigate("login", None))>
                    "Already have an account? Sign in"
                </button>
            </div>
        </section>
    }
}
