use axum::{http::StatusCode, response::IntoResponse, Json};

use tenantry_auth::field;

use crate::context::{CurrentUserField, TenantContext};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    tenant: TenantContext,
    CurrentUserField(email): CurrentUserField<field::Email>,
    CurrentUserField(role): CurrentUserField<field::Role>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "tenant_id": tenant.tenant_id(),
        "user_id": tenant.user_id(),
        "email": email,
        "role": role,
    }))
}
