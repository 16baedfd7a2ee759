//! API client for the Sentinel backend.
//!
//! Requests go through an [`HttpTransport`] so the same client runs on
//! `reqwest` natively and on `fetch` in the browser.

use crate::config::ApiConfig;
use crate::error::{Result, SessionError, GENERIC_FAILURE_MESSAGE};
use crate::store::TokenStore;
use crate::types::{ChatRequest, ChatResponse, ErrorDetail, HealthResponse, TokenResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

const HEALTH_FAILURE_MESSAGE: &str = "Health check failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully-built outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, content_type: &str, body: String) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: Some(body),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Headers carry the credential; only log the method and URL.
impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Status and raw body of a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Transport-level failures map to
/// [`SessionError::Network`]; any HTTP status is a successful send.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    tokens: TokenStore,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: TokenStore, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            tokens,
            transport,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POSTs `body` as JSON with the stored credential attached.
    ///
    /// Fails with [`SessionError::Unauthenticated`] before touching the
    /// network if no credential is stored. Expiry is not checked here.
    pub async fn post_authenticated<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let credential = self.tokens.read().ok_or(SessionError::Unauthenticated)?;

        let payload = serde_json::to_string(body)
            .map_err(|e| SessionError::RequestFailed(format!("Failed to serialize request: {}", e)))?;
        let request = HttpRequest::post(self.config.url(path), CONTENT_TYPE_JSON, payload)
            .with_header("Authorization", credential.header_value());

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = failure_message(&response);
            tracing::warn!(path, status = response.status, "Request failed: {}", message);
            return Err(SessionError::RequestFailed(message));
        }

        parse_body(&response)
    }

    /// Exchanges a username and password for a token. Does not store it.
    pub async fn request_token(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", username)
            .append_pair("password", password)
            .finish();
        let request = HttpRequest::post(self.config.url("/token"), CONTENT_TYPE_FORM, form);

        tracing::info!(username, "Requesting access token");
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "Login rejected");
            return Err(SessionError::CredentialsRejected);
        }

        parse_body(&response)
    }

    /// Sends one chat message on the authenticated `/chat` endpoint.
    pub async fn chat(&self, message: &str) -> Result<ChatResponse> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        self.post_authenticated("/chat", &request).await
    }

    /// Unauthenticated backend health probe.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .transport
            .send(HttpRequest::get(self.config.url("/health")))
            .await?;
        if !response.is_success() {
            return Err(SessionError::RequestFailed(HEALTH_FAILURE_MESSAGE.to_string()));
        }

        parse_body(&response)
    }
}

/// Best-effort `detail` from an error body, else the generic message.
fn failure_message(response: &HttpResponse) -> String {
    serde_json::from_str::<ErrorDetail>(&response.body)
        .ok()
        .and_then(|err| err.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

fn parse_body<R: DeserializeOwned>(response: &HttpResponse) -> Result<R> {
    serde_json::from_str(&response.body).map_err(|e| SessionError::InvalidResponse(e.to_string()))
}
