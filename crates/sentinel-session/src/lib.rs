//! Session gating and backend access for Sockpuppet Sentinel.
//!
//! Platform-neutral: storage, HTTP, navigation and time are traits, so the
//! same logic runs in the browser UI and the native CLI.
//!
//! # Example
//!
//! ```
//! use sentinel_session::{MemoryStore, TokenStore};
//! use std::sync::Arc;
//!
//! let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
//! tokens.save("header.payload.sig", "bearer").unwrap();
//! assert_eq!(
//!     tokens.read().unwrap().header_value(),
//!     "bearer header.payload.sig"
//! );
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod routes;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_support;

pub use client::{ApiClient, HttpRequest, HttpResponse, HttpTransport, Method};
pub use codec::{decode, Claims};
pub use config::{ApiConfig, API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
pub use context::{SessionContext, LOGIN_FAILED_MESSAGE};
pub use error::{DecodeError, Result, SessionError, GENERIC_FAILURE_MESSAGE};
pub use guard::{Access, Clock, FixedClock, Navigator, SessionGuard, SystemClock};
pub use routes::{resolve, Navigation, Route};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{Credential, TokenStore, ACCESS_TOKEN_KEY, DEFAULT_SCHEME, TOKEN_TYPE_KEY};
pub use types::{ChatRequest, ChatResponse, HealthResponse, TokenResponse};
pub use view::ViewState;
