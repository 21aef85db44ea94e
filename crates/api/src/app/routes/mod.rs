use axum::{routing::get, Router};

pub mod auth_pages;
pub mod identity;
pub mod system;

/// Router for the endpoints that read request identity/tenant context.
pub fn router() -> Router {
    Router::new()
        .route("/me", get(identity::me))
        .route("/me/:field", get(identity::me_field))
        .route("/tenant", get(identity::tenant))
        .route("/whoami", get(system::whoami))
}
