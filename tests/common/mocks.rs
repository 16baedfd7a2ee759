//! Shared fakes for the integration tests.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use parking_lot::Mutex;
use sentinel::transport::ReqwestTransport;
use sentinel_session::{ApiConfig, FixedClock, MemoryStore, Navigator, SessionContext};
use std::sync::Arc;

/// Fixed "now" used by every context built here.
pub const NOW: i64 = 1_750_000_000;

/// Navigator that records redirect targets instead of navigating.
#[derive(Default)]
pub struct MockNavigator {
    redirects: Mutex<Vec<String>>,
}

impl MockNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }
}

impl Navigator for MockNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().push(path.to_string());
    }
}

/// Builds an unsigned `header.payload.signature` token.
pub fn token_for(subject: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "sub": subject, "exp": exp }).to_string(),
    );
    format!("{}.{}.sig", header, payload)
}

pub struct TestSession {
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<MockNavigator>,
    pub ctx: SessionContext,
}

/// Real `reqwest` transport against `base_url`, in-memory storage, frozen clock.
pub fn session_for(base_url: &str) -> TestSession {
    let store = Arc::new(MemoryStore::new());
    let navigator = Arc::new(MockNavigator::default());
    let ctx = SessionContext::new(
        ApiConfig::new(Some(base_url)),
        store.clone(),
        Arc::new(ReqwestTransport::new()),
        navigator.clone(),
        Arc::new(FixedClock(NOW)),
    );
    TestSession {
        store,
        navigator,
        ctx,
    }
}
