//! HTTP API application wiring (Axum router + identity resolver).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Router};

use tenantry_auth::{IdentityResolver, InMemoryIdentityDirectory, ResolveError};

use crate::config::ApiConfig;
use crate::middleware;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(resolver: Arc<dyn IdentityResolver>) -> Router {
    let identity_state = middleware::IdentityState { resolver };

    // Context-aware routes: identity is attached (when presented) before
    // handlers resolve their parameters.
    let context_routes = routes::router().layer(axum::middleware::from_fn_with_state(
        identity_state,
        middleware::identity_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/auth", routes::auth_pages::router())
        .merge(context_routes)
}

/// Dev resolver: an in-memory directory, optionally seeded from fixtures.
pub fn build_resolver(config: &ApiConfig) -> Result<Arc<dyn IdentityResolver>, ResolveError> {
    let directory = match &config.identity_fixtures {
        Some(path) => InMemoryIdentityDirectory::from_json_file(path)?,
        None => {
            tracing::warn!("no identity fixtures configured; every request will be anonymous");
            InMemoryIdentityDirectory::new()
        }
    };

    Ok(Arc::new(directory))
}
