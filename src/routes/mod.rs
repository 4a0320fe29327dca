//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON glue endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. The app shell is
//! served at `/` and hydrates in the browser; `/api` carries the two
//! builder endpoints.

pub mod payment;
pub mod qr;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::state::AppState;

/// JSON API routes shared by the hydrated app and external callers.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/payment/process",
            post(payment::process).fallback(method_not_allowed),
        )
        .route("/api/qr/generate", post(qr::generate).fallback(method_not_allowed))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Both endpoints are POST-only and answer other methods with a JSON 405.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR frontend: API routes + the app shell + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root.
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root).append_index_html_on_directories(true)))
}
