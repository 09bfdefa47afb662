//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos page is server-rendered at `/` and hydrated from the `/pkg`
//! bundle. Figures are plain static files mounted under
//! `<base path>figures`, matching the URLs the page emits.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use imago_client::util::assets::FIGURES_DIR;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::ServeError;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Route path that serves figure files for `base`.
///
/// An absolute-URL base means figures live on another origin; they are still
/// mounted at `/figures` so a local checkout renders.
pub fn figures_mount(base: &str) -> String {
    if base.starts_with('/') {
        format!("{base}{FIGURES_DIR}")
    } else {
        format!("/{FIGURES_DIR}")
    }
}

/// Health check + figure files. Independent of Leptos configuration.
pub fn static_routes(config: &SiteConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service(&figures_mount(&config.base_path), ServeDir::new(&config.figures_dir))
}

/// Full site: static routes, the `/pkg` bundle, and the server-rendered page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn site_app(config: &SiteConfig) -> Result<Router, ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(imago_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || imago_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
