//! Opaque identifiers for the two request-scoped principals: tenant and user.
//!
//! Identifiers are issued upstream (identity provider, tenant directory) and
//! are never interpreted here. The only rule enforced on parse is that an id
//! is not blank.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a tenant (multi-tenant isolation boundary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

/// Identifier of an authenticated user (the request principal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_opaque_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Mint a fresh identifier.
            ///
            /// Uses UUIDv7 text (time-ordered). Upstream systems may use any
            /// other non-blank format.
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: must not be blank", $name)));
                }
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_opaque_id!(TenantId, "TenantId");
impl_opaque_id!(UserId, "UserId");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(matches!("".parse::<TenantId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("   ".parse::<UserId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn parse_keeps_value_verbatim() {
        let id: TenantId = "t1".parse().unwrap();
        assert_eq!(id.as_str(), "t1");
        assert_eq!(id.to_string(), "t1");
    }

    #[test]
    fn minted_ids_are_distinct_uuids() {
        let a = UserId::new();
        let b = UserId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TenantId::from("acme");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"acme\"");
        let back: TenantId = serde_json::from_str("\"acme\"").unwrap();
        assert_eq!(back, id);
    }

    proptest! {
        #[test]
        fn non_blank_ids_parse_and_display_unchanged(s in "[A-Za-z0-9_-]{1,40}") {
            let id: UserId = s.parse().unwrap();
            prop_assert_eq!(id.to_string(), s);
        }
    }
}
