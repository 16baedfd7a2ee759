//! `reqwest` implementation of the HTTP transport.

use async_trait::async_trait;
use sentinel_session::{HttpRequest, HttpResponse, HttpTransport, Method, Result, SessionError};

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        tracing::debug!(?method, %url, "Sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;
        tracing::debug!(status, "Received response");

        Ok(HttpResponse { status, body })
    }
}
