//! App shell: state ownership, session bootstrap, auth listener, and the
//! page-name view switch.
//!
//! ARCHITECTURE
//! ============
//! One component owns every signal (auth + page state) and provides them
//! via context; pages mutate state only through `PageState::navigate`.
//! The view router picks the page component, and gate redirects are
//! applied while rendering. The auth-event subscription is scoped to the
//! shell and released on cleanup, so no auth transition can reach a
//! torn-down shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::net::events::{AuthEvent, AuthEvents, AuthSubscription};
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminPage;
use crate::pages::client_portal::ClientPortalPage;
use crate::pages::crm::CrmPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::pricing::PricingPage;
use crate::pages::services::ServicesPage;
use crate::pages::signup::SignupPage;
use crate::pages::start_project::StartProjectPage;
use crate::state::auth::AuthState;
use crate::state::page::PageState;
use crate::state::router::{Resolution, View, resolve};
use crate::state::session;

/// SSR document shell wrapping the app.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="LMNTS Studio" />
        <Router>
            <Routes fallback=|| view! { <AppShell /> }>
                <Route path=path!("") view=AppShell />
            </Routes>
        </Router>
    }
}

/// The page-name switch and its state, covering the whole site.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let page = RwSignal::new(PageState::default());
    let events = AuthEvents::default();
    provide_context(auth);
    provide_context(page);
    provide_context(events.clone());

    // Auth state listener, held until teardown.
    let subscription = install_auth_listener(&events, auth, page);
    on_cleanup(move || drop(subscription));

    // Startup session check (browser only; SSR renders the interstitial).
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = run_bootstrap().await;
        auth.update(|a| session::apply_bootstrap(a, outcome));
    });

    let resolved = move || {
        let auth_now = auth.get();
        let current = page.get().current;
        let Resolution { view, forced } = resolve(&current, auth_now.loading, auth_now.user.as_ref());
        if let Some(target) = forced {
            // Gate redirect applied at render time, as the shell always has.
            page.update(|p| p.current = target);
        }
        view
    };

    view! {
        <div class="site">
            <Navbar />
            <main class="site__main">{move || render_view(resolved())}</main>
            <Footer />
        </div>
    }
}

/// Subscribe the shell to auth events. `SignedIn` re-fetches user details
/// and installs them; `SignedOut` clears the session and returns home;
/// token refreshes are ignored.
fn install_auth_listener(
    events: &AuthEvents,
    auth: RwSignal<AuthState>,
    page: RwSignal<PageState>,
) -> AuthSubscription {
    events.subscribe(std::sync::Arc::new(move |event: &AuthEvent| match event {
        AuthEvent::SignedIn { session } => {
            let access_token = session.access_token.clone();
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    if let Some(user) = crate::net::provider::get_user(&access_token).await {
                        auth.update(|a| session::apply_signed_in(a, &user, &access_token));
                    } else {
                        log::warn!("signed-in event without fetchable user details");
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = access_token;
            }
        }
        AuthEvent::SignedOut => {
            auth.update(|a| page.update(|p| session::apply_signed_out(a, p)));
        }
        AuthEvent::TokenRefreshed { .. } => {}
    }))
}

#[cfg(feature = "hydrate")]
async fn run_bootstrap() -> session::Bootstrap {
    let stored = crate::net::provider::get_session().await;
    let user = match &stored {
        Some(found) => crate::net::provider::get_user(&found.access_token).await,
        None => None,
    };
    session::evaluate_bootstrap(stored, user)
}

fn render_view(view: View) -> AnyView {
    match view {
        View::Loading => view! { <div class="interstitial">"Loading..."</div> }.into_any(),
        View::Home => view! { <HomePage /> }.into_any(),
        View::Services => view! { <ServicesPage /> }.into_any(),
        View::Pricing => view! { <PricingPage /> }.into_any(),
        View::About => view! { <AboutPage /> }.into_any(),
        View::Portfolio => view! { <PortfolioPage /> }.into_any(),
        View::StartProject => view! { <StartProjectPage /> }.into_any(),
        View::Admin => view! { <AdminPage /> }.into_any(),
        View::Crm => view! { <CrmPage /> }.into_any(),
        View::ClientPortal => view! { <ClientPortalPage /> }.into_any(),
        View::Login => view! { <LoginPage /> }.into_any(),
        View::Signup => view! { <SignupPage /> }.into_any(),
    }
}
