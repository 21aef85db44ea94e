//! In-memory credential directory (dev/test resolver).

use std::{collections::HashMap, path::Path, sync::RwLock};

use serde::Deserialize;

use crate::{IdentityResolver, ResolveError, UserIdentity};

/// One seeded credential and the identity it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityFixture {
    pub credential: String,
    pub user: UserIdentity,
}

/// Credential → identity map.
///
/// Lookups are exact matches on the opaque credential string. Nothing is
/// verified or expired; this stands in for a real upstream resolver.
#[derive(Debug, Default)]
pub struct InMemoryIdentityDirectory {
    entries: RwLock<HashMap<String, UserIdentity>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: impl IntoIterator<Item = IdentityFixture>) -> Self {
        let entries = fixtures
            .into_iter()
            .map(|f| (f.credential, f.user))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Load fixtures from a JSON array of `{ "credential": ..., "user": {...} }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::Fixtures(format!("{}: {e}", path.display())))?;
        let fixtures: Vec<IdentityFixture> = serde_json::from_str(&raw)
            .map_err(|e| ResolveError::Fixtures(format!("{}: {e}", path.display())))?;

        tracing::info!(path = %path.display(), count = fixtures.len(), "loaded identity fixtures");
        Ok(Self::from_fixtures(fixtures))
    }

    /// Register (or replace) the identity behind a credential.
    pub fn insert(&self, credential: impl Into<String>, user: UserIdentity) -> Option<UserIdentity> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(credential.into(), user)
    }

    pub fn remove(&self, credential: &str) -> Option<UserIdentity> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(credential)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdentityResolver for InMemoryIdentityDirectory {
    fn resolve(&self, credential: &str) -> Result<UserIdentity, ResolveError> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(credential)
            .cloned()
            .ok_or(ResolveError::UnknownCredential)
    }
}
