//! `tenantry-core` — identifiers and the error model shared by every crate.
//!
//! This crate has no HTTP or storage concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{TenantId, UserId};
