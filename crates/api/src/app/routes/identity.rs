use axum::{extract::Path, http::StatusCode, Json};

use tenantry_auth::{UserField, UserFieldValue, UserIdentity};

use crate::app::errors::json_error;
use crate::context::{CurrentUser, TenantContext};

/// The whole identity; `null` for anonymous requests.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<Option<UserIdentity>> {
    Json(user)
}

/// A single identity field; `null` when anonymous or unset.
pub async fn me_field(
    Path(field): Path<String>,
    user: CurrentUser,
) -> Result<Json<Option<UserFieldValue>>, axum::response::Response> {
    let field: UserField = field
        .parse()
        .map_err(|e: tenantry_core::DomainError| json_error(StatusCode::BAD_REQUEST, "invalid_user_field", e.to_string()))?;

    Ok(Json(user.field(field)))
}

pub async fn tenant(tenant: TenantContext) -> Json<TenantContext> {
    Json(tenant)
}
