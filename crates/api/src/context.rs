//! Request-scoped identity and tenant context.
//!
//! Upstream middleware attaches three independent extensions to each request:
//! the resolved [`UserIdentity`], its [`TenantId`] and its [`UserId`]. The
//! accessors here only read those extensions; they never mutate the request
//! and never look anything up.
//!
//! - [`CurrentUser`] / [`CurrentUserField`] tolerate an anonymous request and
//!   yield `None`.
//! - [`TenantContext`] fails fast with [`ContextError`] when either id is
//!   missing. Handlers that accept absence can extract `Option<TenantContext>`.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, Extensions, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use tenantry_auth::{UserField, UserFieldSelector, UserFieldValue, UserIdentity};
use tenantry_core::{TenantId, UserId};

use crate::app::errors::json_error;

/// Tenant context for a request.
///
/// Built fresh on every extraction; both ids are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantContext {
    tenant_id: TenantId,
    user_id: UserId,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId, user_id: UserId) -> Self {
        Self { tenant_id, user_id }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Which part of the tenant context was absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContextField {
    TenantId,
    UserId,
}

impl core::fmt::Display for ContextField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ContextField::TenantId => "tenant_id",
            ContextField::UserId => "user_id",
        })
    }
}

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("missing tenant context: {0} was not attached to the request")]
    MissingTenantContext(ContextField),
}

impl IntoResponse for ContextError {
    fn into_response(self) -> Response {
        json_error(StatusCode::UNAUTHORIZED, "missing_tenant_context", self.to_string())
    }
}

/// The whole identity, or `None` when the request is anonymous.
pub fn current_user(extensions: &Extensions) -> Option<UserIdentity> {
    extensions.get::<UserIdentity>().cloned()
}

/// One field of the identity, selected at runtime.
pub fn current_user_field(extensions: &Extensions, field: UserField) -> Option<UserFieldValue> {
    extensions.get::<UserIdentity>()?.field(field)
}

/// One field of the identity, selected by type.
pub fn current_user_selected<F: UserFieldSelector>(extensions: &Extensions) -> Option<F::Value> {
    extensions.get::<UserIdentity>().and_then(F::select)
}

pub fn current_tenant(extensions: &Extensions) -> Result<TenantContext, ContextError> {
    let tenant_id = extensions
        .get::<TenantId>()
        .cloned()
        .ok_or(ContextError::MissingTenantContext(ContextField::TenantId))?;
    let user_id = extensions
        .get::<UserId>()
        .cloned()
        .ok_or(ContextError::MissingTenantContext(ContextField::UserId))?;

    Ok(TenantContext::new(tenant_id, user_id))
}

/// Extractor: the current user, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub Option<UserIdentity>);

impl CurrentUser {
    pub fn field(&self, field: UserField) -> Option<UserFieldValue> {
        self.0.as_ref()?.field(field)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(current_user(&parts.extensions)))
    }
}

/// Extractor: a single typed field of the current user, e.g.
/// `CurrentUserField<field::Email>`.
pub struct CurrentUserField<F: UserFieldSelector>(pub Option<F::Value>);

#[async_trait]
impl<S, F> FromRequestParts<S> for CurrentUserField<F>
where
    S: Send + Sync,
    F: UserFieldSelector,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUserField(current_user_selected::<F>(&parts.extensions)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = ContextError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_tenant(&parts.extensions).inspect_err(|err| {
            tracing::warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                error = %err,
                "tenant context missing; is the identity middleware mounted on this route?"
            );
        })
    }
}
