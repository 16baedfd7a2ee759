//! Token store: create, read and delete the stored credential.

use crate::error::Result;
use crate::storage::KeyValueStore;
use std::fmt;
use std::sync::Arc;

/// Storage key holding the signed token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the token scheme label.
pub const TOKEN_TYPE_KEY: &str = "token_type";
/// Scheme assumed when only the token value is stored.
pub const DEFAULT_SCHEME: &str = "bearer";

/// The stored signed token plus its scheme label.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub scheme: String,
}

impl Credential {
    pub fn new(value: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scheme: scheme.into(),
        }
    }

    /// `Authorization` header value: `"<scheme> <value>"`.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.value)
    }
}

// Keep the token itself out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("scheme", &self.scheme)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Owns the two storage entries that make up a [`Credential`].
///
/// Cloning is cheap; clones share the same backing store.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Writes both parts, overwriting any previous credential.
    ///
    /// The value is stored as given. The two writes are independent: a
    /// failure on the second leaves the first in place.
    pub fn save(&self, value: &str, scheme: &str) -> Result<()> {
        self.backend.set(ACCESS_TOKEN_KEY, value)?;
        self.backend.set(TOKEN_TYPE_KEY, scheme)?;
        tracing::debug!(scheme, "Stored credential");
        Ok(())
    }

    /// Returns the stored credential, or `None` if the value part is missing
    /// or empty. An empty scheme reads as [`DEFAULT_SCHEME`].
    ///
    /// A read failure is logged and treated as absence.
    pub fn read(&self) -> Option<Credential> {
        let value = match self.backend.get(ACCESS_TOKEN_KEY) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!("Failed to read stored token: {}", e);
                return None;
            }
        };

        let scheme = match self.backend.get(TOKEN_TYPE_KEY) {
            Ok(Some(scheme)) if !scheme.is_empty() => scheme,
            Ok(_) => DEFAULT_SCHEME.to_string(),
            Err(e) => {
                tracing::warn!("Failed to read stored token type: {}", e);
                DEFAULT_SCHEME.to_string()
            }
        };

        Some(Credential { value, scheme })
    }

    /// Removes both parts. Safe to call when nothing is stored.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(ACCESS_TOKEN_KEY)?;
        self.backend.remove(TOKEN_TYPE_KEY)?;
        tracing::debug!("Cleared stored credential");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> (Arc<MemoryStore>, TokenStore) {
        let backend = Arc::new(MemoryStore::new());
        let tokens = TokenStore::new(backend.clone());
        (backend, tokens)
    }

    #[test]
    fn test_save_then_read_builds_header() {
        let (_, tokens) = store();
        tokens.save("abc.def.ghi", "bearer").unwrap();

        let cred = tokens.read().expect("credential should be present");
        assert_eq!(cred.header_value(), "bearer abc.def.ghi");
    }

    #[test]
    fn test_save_overwrites_previous() {
        let (_, tokens) = store();
        tokens.save("first", "bearer").unwrap();
        tokens.save("second", "Token").unwrap();

        assert_eq!(tokens.read().unwrap(), Credential::new("second", "Token"));
    }

    #[test]
    fn test_read_empty_store_is_absent() {
        let (_, tokens) = store();
        assert!(tokens.read().is_none());
    }

    #[test]
    fn test_missing_scheme_defaults_to_bearer() {
        let (backend, tokens) = store();
        backend.set(ACCESS_TOKEN_KEY, "tok").unwrap();

        assert_eq!(tokens.read().unwrap().header_value(), "bearer tok");
    }

    #[test]
    fn test_empty_value_is_absent() {
        let (_, tokens) = store();
        tokens.save("", "").unwrap();
        assert!(tokens.read().is_none());

        tokens.save("", "bearer").unwrap();
        assert!(tokens.read().is_none());
    }

    #[test]
    fn test_empty_scheme_defaults_to_bearer() {
        let (_, tokens) = store();
        tokens.save("tok", "").unwrap();

        assert_eq!(tokens.read().unwrap(), Credential::new("tok", DEFAULT_SCHEME));
    }

    #[test]
    fn test_scheme_without_value_is_absent() {
        let (backend, tokens) = store();
        backend.set(TOKEN_TYPE_KEY, "bearer").unwrap();

        assert!(tokens.read().is_none());
    }

    #[test]
    fn test_clear_removes_both_keys_and_is_idempotent() {
        let (backend, tokens) = store();
        tokens.save("tok", "bearer").unwrap();
        assert_eq!(backend.len(), 2);

        tokens.clear().unwrap();
        assert!(backend.is_empty());
        tokens.clear().unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_debug_redacts_value() {
        let cred = Credential::new("secret-token", "bearer");
        let debug = format!("{:?}", cred);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("bearer"));
    }
}
