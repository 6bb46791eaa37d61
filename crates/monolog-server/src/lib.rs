//! monolog-server
//!
//! Static asset server for the single-page app plus the JSON profile API.
//! Every path that is neither an API route nor an existing asset falls back
//! to the app's `index.html`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new().route(
        "/profile",
        get(routes::profile::get_profile).post(routes::profile::update_profile),
    );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api)
        .fallback_service(routes::assets::spa_service(assets_dir))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
