//! Session guard: decides whether a protected view may render.
//!
//! The predicate ([`SessionGuard::has_valid_session`]) is pure apart from
//! the store read. The effectful half ([`SessionGuard::enforce`],
//! [`SessionGuard::logout`]) clears the store and then navigates to the login
//! route. Nothing is cached between calls, so a session can go from valid to
//! invalid between two checks without any event firing.

use crate::codec::{self, Claims};
use crate::error::{Result, SessionError};
use crate::routes::Route;
use crate::store::TokenStore;
use std::sync::Arc;

/// Source of wall-clock time in epoch seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Performs a full-page navigation.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// The store has been cleared and a redirect to the login route issued.
    Deny,
}

#[derive(Clone)]
pub struct SessionGuard {
    tokens: TokenStore,
    clock: Arc<dyn Clock>,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(tokens: TokenStore, clock: Arc<dyn Clock>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            tokens,
            clock,
            navigator,
        }
    }

    /// Evaluates the stored credential and says why it is unusable.
    ///
    /// Callers deciding whether to render should use
    /// [`has_valid_session`](Self::has_valid_session) or
    /// [`enforce`](Self::enforce); the distinction is only logged.
    pub fn check(&self) -> Result<Claims> {
        let credential = self.tokens.read().ok_or(SessionError::Unauthenticated)?;
        let claims = codec::decode(&credential.value)?;

        let now = self.clock.now();
        if !claims.is_live_at(now) {
            return Err(SessionError::SessionExpired {
                expired_at: claims.expires_at,
            });
        }
        Ok(claims)
    }

    /// True iff a credential is stored, decodes, and `exp > now`.
    pub fn has_valid_session(&self) -> bool {
        match self.check() {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!("No valid session: {}", reason);
                false
            }
        }
    }

    /// Claims of the current session, if it is valid.
    pub fn current_claims(&self) -> Option<Claims> {
        self.check().ok()
    }

    /// Allows the guarded view, or clears the store and redirects to login.
    pub fn enforce(&self) -> Access {
        if self.has_valid_session() {
            Access::Allow
        } else {
            self.clear_and_redirect();
            Access::Deny
        }
    }

    /// Clears the store and redirects to login, whatever the session state.
    pub fn logout(&self) {
        tracing::info!("Logging out");
        self.clear_and_redirect();
    }

    fn clear_and_redirect(&self) {
        if let Err(e) = self.tokens.clear() {
            tracing::warn!("Failed to clear stored credential: {}", e);
        }
        self.navigator.redirect(Route::Login.path());
    }
}
