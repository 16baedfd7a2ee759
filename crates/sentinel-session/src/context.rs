//! Session context: one object wiring store, guard and client together.
//!
//! Front ends build a single [`SessionContext`] and hand it to everything
//! that needs the credential, rather than reaching for global storage.

use crate::client::{ApiClient, HttpTransport};
use crate::codec;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::guard::{Clock, Navigator, SessionGuard};
use crate::storage::KeyValueStore;
use crate::store::TokenStore;
use crate::types::TokenResponse;
use std::sync::Arc;

/// Shown on the login form for any failed attempt.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your username and password.";

#[derive(Clone)]
pub struct SessionContext {
    tokens: TokenStore,
    guard: SessionGuard,
    api: ApiClient,
}

impl SessionContext {
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn KeyValueStore>,
        transport: Arc<dyn HttpTransport>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let tokens = TokenStore::new(store);
        let guard = SessionGuard::new(tokens.clone(), clock, navigator);
        let api = ApiClient::new(config, tokens.clone(), transport);
        Self { tokens, guard, api }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Requests a token and stores it. Nothing is written on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let token = self.api.request_token(username, password).await?;
        self.tokens.save(&token.access_token, &token.token_type)?;

        match codec::decode(&token.access_token) {
            Ok(claims) => tracing::info!(subject = %claims.subject, "User logged in"),
            Err(e) => tracing::warn!("Token stored, but decoding failed: {}", e),
        }
        Ok(token)
    }
}
