//! Fakes shared by the unit tests.

use crate::client::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::{Result, SessionError};
use crate::guard::Navigator;
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Builds a `header.payload.signature` token with a dummy signature.
pub fn unsigned_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

pub fn token_expiring_at(exp: i64) -> String {
    unsigned_token(&serde_json::json!({ "sub": "admin@example.com", "exp": exp }))
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().push(path.to_string());
    }
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: HttpResponse) {
        self.replies.lock().push_back(Ok(response));
    }

    pub fn fail_with(&self, message: &str) {
        self.replies
            .lock()
            .push_back(Err(SessionError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().push(request);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(SessionError::Network("no scripted response".to_string())))
    }
}
