//! Identity attachment (the upstream half of the request-context contract).
//!
//! Verification itself lives behind [`IdentityResolver`]; this layer only turns
//! a bearer credential into request extensions the accessors in
//! [`crate::context`] can read.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Extensions, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use tenantry_auth::{IdentityResolver, UserIdentity};

use crate::app::errors::json_error;

#[derive(Clone)]
pub struct IdentityState {
    pub resolver: Arc<dyn IdentityResolver>,
}

/// Resolve the bearer credential, if any, and attach the identity.
///
/// - no `Authorization` header: continue anonymous
/// - malformed header: 401 `invalid_authorization`
/// - credential rejected: 401 `unauthenticated`
pub async fn identity_middleware(
    State(state): State<IdentityState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let credential = match extract_bearer(req.headers()) {
        Ok(Some(token)) => token.to_owned(),
        Ok(None) => {
            tracing::debug!(path = %req.uri().path(), "anonymous request");
            return Ok(next.run(req).await);
        }
        Err(reason) => {
            tracing::warn!(path = %req.uri().path(), reason, "rejected authorization header");
            return Err(json_error(StatusCode::UNAUTHORIZED, "invalid_authorization", reason));
        }
    };

    let user = state.resolver.resolve(&credential).map_err(|e| {
        tracing::warn!(path = %req.uri().path(), error = %e, "credential not resolved");
        json_error(StatusCode::UNAUTHORIZED, "unauthenticated", e.to_string())
    })?;

    tracing::debug!(tenant_id = %user.tenant_id, user_id = %user.id, "identity attached");
    attach_identity(req.extensions_mut(), user);

    Ok(next.run(req).await)
}

/// Insert the identity and its tenant/user ids as separate extensions.
pub fn attach_identity(extensions: &mut Extensions, user: UserIdentity) {
    extensions.insert(user.tenant_id.clone());
    extensions.insert(user.id.clone());
    extensions.insert(user);
}

fn extract_bearer(headers: &HeaderMap) -> Result<Option<&str>, &'static str> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header
        .to_str()
        .map_err(|_| "authorization header is not valid ASCII")?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or("authorization header must use the Bearer scheme")?
        .trim();

    if token.is_empty() {
        return Err("bearer credential is empty");
    }

    Ok(Some(token))
}
