//! Resolved identity of the request principal.
//!
//! A `UserIdentity` is produced by upstream authentication once per request
//! and is read-only afterwards. Handlers either take the whole record or
//! project a single field out of it (see [`UserField`]).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use tenantry_core::{DomainError, TenantId, UserId};

use crate::Role;

/// Snapshot of the tenant a principal belongs to, as of the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSnapshot {
    pub id: TenantId,
    pub name: String,
    pub slug: String,
    /// Billing plan identifier (opaque).
    pub plan: String,
}

/// The authenticated principal attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable identifier of the principal.
    pub id: UserId,

    /// Identifier issued by the external identity provider.
    pub external_auth_id: String,

    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Permission role within the tenant (not interpreted here).
    pub role: Role,

    /// Owning tenant.
    pub tenant_id: TenantId,

    pub tenant: TenantSnapshot,
}

impl UserIdentity {
    /// "First Last" when either part is known, the email otherwise.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Project a single field.
    ///
    /// Nullable fields that are unset project to `None`, the same as an absent
    /// user would at the request level.
    pub fn field(&self, field: UserField) -> Option<UserFieldValue> {
        match field {
            UserField::Id => Some(UserFieldValue::UserId(self.id.clone())),
            UserField::ExternalAuthId => Some(UserFieldValue::Text(self.external_auth_id.clone())),
            UserField::Email => Some(UserFieldValue::Text(self.email.clone())),
            UserField::FirstName => self.first_name.clone().map(UserFieldValue::Text),
            UserField::LastName => self.last_name.clone().map(UserFieldValue::Text),
            UserField::Role => Some(UserFieldValue::Role(self.role.clone())),
            UserField::TenantId => Some(UserFieldValue::TenantId(self.tenant_id.clone())),
            UserField::Tenant => Some(UserFieldValue::Tenant(self.tenant.clone())),
        }
    }
}

/// Names of the keys of [`UserIdentity`] that can be selected individually.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Id,
    ExternalAuthId,
    Email,
    FirstName,
    LastName,
    Role,
    TenantId,
    Tenant,
}

impl UserField {
    pub const ALL: [UserField; 8] = [
        UserField::Id,
        UserField::ExternalAuthId,
        UserField::Email,
        UserField::FirstName,
        UserField::LastName,
        UserField::Role,
        UserField::TenantId,
        UserField::Tenant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::ExternalAuthId => "external_auth_id",
            UserField::Email => "email",
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Role => "role",
            UserField::TenantId => "tenant_id",
            UserField::Tenant => "tenant",
        }
    }
}

impl core::fmt::Display for UserField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = DomainError;

    /// Accepts both the snake_case key and its camelCase spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(UserField::Id),
            "external_auth_id" | "externalAuthId" => Ok(UserField::ExternalAuthId),
            "email" => Ok(UserField::Email),
            "first_name" | "firstName" => Ok(UserField::FirstName),
            "last_name" | "lastName" => Ok(UserField::LastName),
            "role" => Ok(UserField::Role),
            "tenant_id" | "tenantId" => Ok(UserField::TenantId),
            "tenant" => Ok(UserField::Tenant),
            other => Err(DomainError::validation(format!(
                "unknown user field '{other}'; expected one of: {}",
                UserField::ALL.map(|f| f.as_str()).join(", ")
            ))),
        }
    }
}

/// Value of a single projected field.
///
/// Serializes as the bare value (a string, or an object for `tenant`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserFieldValue {
    UserId(UserId),
    TenantId(TenantId),
    Role(Role),
    Text(String),
    Tenant(TenantSnapshot),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_user() -> UserIdentity {
        UserIdentity {
            id: UserId::from("u1"),
            external_auth_id: "idp|42".to_string(),
            email: "ada@acme.test".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            role: Role::new("admin"),
            tenant_id: TenantId::from("t1"),
            tenant: TenantSnapshot {
                id: TenantId::from("t1"),
                name: "Acme".to_string(),
                slug: "acme".to_string(),
                plan: "pro".to_string(),
            },
        }
    }

    #[test]
    fn field_projection_returns_the_named_value() {
        let user = sample_user();
        assert_eq!(
            user.field(UserField::Email),
            Some(UserFieldValue::Text("ada@acme.test".to_string()))
        );
        assert_eq!(user.field(UserField::Role), Some(UserFieldValue::Role(Role::new("admin"))));
        assert_eq!(
            user.field(UserField::Tenant),
            Some(UserFieldValue::Tenant(user.tenant.clone()))
        );
    }

    #[test]
    fn unset_nullable_field_projects_to_none() {
        let user = sample_user();
        assert_eq!(user.field(UserField::LastName), None);
        assert_eq!(user.field(UserField::FirstName), Some(UserFieldValue::Text("Ada".to_string())));
    }

    #[test]
    fn field_names_parse_in_both_spellings() {
        assert_eq!("externalAuthId".parse::<UserField>().unwrap(), UserField::ExternalAuthId);
        assert_eq!("external_auth_id".parse::<UserField>().unwrap(), UserField::ExternalAuthId);
        for field in UserField::ALL {
            assert_eq!(field.as_str().parse::<UserField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_a_validation_error() {
        let err = "password".parse::<UserField>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("password")));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = sample_user();
        assert_eq!(user.display_name(), "Ada");

        user.last_name = Some("Lovelace".to_string());
        assert_eq!(user.display_name(), "Ada Lovelace");

        user.first_name = None;
        user.last_name = None;
        assert_eq!(user.display_name(), "ada@acme.test");
    }

    #[test]
    fn field_values_serialize_as_bare_json() {
        let user = sample_user();
        let email = serde_json::to_value(user.field(UserField::Email)).unwrap();
        assert_eq!(email, serde_json::json!("ada@acme.test"));

        let tenant = serde_json::to_value(user.field(UserField::Tenant)).unwrap();
        assert_eq!(tenant["slug"], "acme");
    }

    #[test]
    fn missing_optional_names_deserialize_as_none() {
        let json = serde_json::json!({
            "id": "u2",
            "external_auth_id": "idp|7",
            "email": "bo@acme.test",
            "role": "member",
            "tenant_id": "t1",
            "tenant": { "id": "t1", "name": "Acme", "slug": "acme", "plan": "free" }
        });
        let user: UserIdentity = serde_json::from_value(json).unwrap();
        assert_eq!(user.first_name, None);
        assert_eq!(user.role.as_str(), "member");
    }
}
