//! `tenantry-auth` — the authenticated identity as seen by request handlers.
//!
//! This crate is intentionally decoupled from HTTP. It models what upstream
//! authentication hands to the API (`UserIdentity`) and the seam through which
//! it does so (`IdentityResolver`). How credentials are verified is not decided
//! here.

pub mod directory;
pub mod field;
pub mod identity;
pub mod resolver;
pub mod roles;

pub use directory::{IdentityFixture, InMemoryIdentityDirectory};
pub use field::UserFieldSelector;
pub use identity::{TenantSnapshot, UserField, UserFieldValue, UserIdentity};
pub use resolver::{IdentityResolver, ResolveError};
pub use roles::Role;
