// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::collections::HashSet;
use std::env;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{DEFAULT_ALLOWLIST, DEV_JWT_SECRET, JWT_SECRET_ENV};
use crate::store::InMemoryStore;

/// Process-wide authentication configuration.
///
/// Loaded once at startup and shared read-only between requests, so no
/// synchronization is needed. Secret rotation is out of scope.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret the token issuer signs with.
    pub secret: Vec<u8>,
    /// Exact paths exempt from authentication (case-sensitive).
    pub allowlist: HashSet<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the secret
        f.debug_struct("AuthConfig")
            .field("allowlist", &self.allowlist)
            .finish()
    }
}

impl AuthConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            allowlist: DEFAULT_ALLOWLIST.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Load the secret from the environment, falling back to the insecure
    /// development default.
    pub fn from_env() -> Self {
        let secret = match env::var(JWT_SECRET_ENV) {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!(
                    "{JWT_SECRET_ENV} is not set; using the insecure development secret"
                );
                DEV_JWT_SECRET.to_string()
            }
        };
        Self::new(secret.into_bytes())
    }

    /// Replace the unauthenticated-path allowlist.
    pub fn with_allowlist<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowlist = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Exact-path allowlist check.
    pub fn is_allowlisted(&self, path: &str) -> bool {
        self.allowlist.contains(path)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(store: InMemoryStore, auth: AuthConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth: Arc::new(auth),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            InMemoryStore::with_seed_users(),
            AuthConfig::new(DEV_JWT_SECRET.as_bytes()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allowlist_is_exact_paths() {
        let config = AuthConfig::new(b"secret".to_vec());
        assert!(config.is_allowlisted("/users/health"));
        assert!(config.is_allowlisted("/actuator/health"));
        // Exact match only - nested or similar paths are not exempt.
        assert!(!config.is_allowlisted("/users/health/"));
        assert!(!config.is_allowlisted("/users/healthcheck"));
        assert!(!config.is_allowlisted("/users/johnd"));
    }

    #[test]
    fn allowlist_is_case_sensitive() {
        let config = AuthConfig::new(b"secret".to_vec());
        assert!(!config.is_allowlisted("/Users/Health"));
    }

    #[test]
    fn with_allowlist_replaces_defaults() {
        let config = AuthConfig::new(b"secret".to_vec()).with_allowlist(["/ping"]);
        assert!(config.is_allowlisted("/ping"));
        assert!(!config.is_allowlisted("/users/health"));
    }
}
