use thiserror::Error;

use crate::UserIdentity;

/// Failure to turn a presented credential into an identity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("credential is not recognised")]
    UnknownCredential,

    #[error("identity fixtures could not be loaded: {0}")]
    Fixtures(String),
}

/// Upstream seam that resolves a bearer credential to the request principal.
///
/// Implementations own verification (signatures, sessions, tenant lookup).
/// The API only consumes the resulting [`UserIdentity`].
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, credential: &str) -> Result<UserIdentity, ResolveError>;
}
