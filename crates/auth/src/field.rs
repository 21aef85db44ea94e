//! Typed field selectors over [`UserIdentity`].
//!
//! Each marker type names one key of the identity and fixes the type of the
//! projected value, so a handler can ask for `field::Email` and receive an
//! `Option<String>` instead of an untyped [`UserFieldValue`](crate::UserFieldValue).

use crate::{UserField, UserIdentity};

/// A statically known projection of one [`UserIdentity`] field.
pub trait UserFieldSelector: Send + Sync + 'static {
    /// The key this selector reads.
    const FIELD: UserField;

    type Value: Clone + Send + 'static;

    /// Read the field. `None` for nullable fields that are unset.
    fn select(user: &UserIdentity) -> Option<Self::Value>;
}

macro_rules! selector {
    ($(#[$doc:meta])* $name:ident, $field:expr, $value:ty, |$u:ident| $select:expr) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name;

        impl UserFieldSelector for $name {
            const FIELD: UserField = $field;
            type Value = $value;

            fn select($u: &UserIdentity) -> Option<Self::Value> {
                $select
            }
        }
    };
}

selector!(Id, UserField::Id, tenantry_core::UserId, |u| Some(u.id.clone()));
selector!(
    /// Identifier issued by the external identity provider.
    ExternalAuthId,
    UserField::ExternalAuthId,
    String,
    |u| Some(u.external_auth_id.clone())
);
selector!(Email, UserField::Email, String, |u| Some(u.email.clone()));
selector!(FirstName, UserField::FirstName, String, |u| u.first_name.clone());
selector!(LastName, UserField::LastName, String, |u| u.last_name.clone());
selector!(Role, UserField::Role, crate::Role, |u| Some(u.role.clone()));
selector!(TenantId, UserField::TenantId, tenantry_core::TenantId, |u| Some(u.tenant_id.clone()));
selector!(
    /// The nested tenant snapshot.
    Tenant,
    UserField::Tenant,
    crate::TenantSnapshot,
    |u| Some(u.tenant.clone())
);
