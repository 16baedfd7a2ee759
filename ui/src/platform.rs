//! Browser implementations of the session traits.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use sentinel_session::{
    HttpRequest, HttpResponse, HttpTransport, KeyValueStore, Method, Navigator, Result,
    SessionError,
};

fn storage_error(err: impl std::fmt::Debug) -> SessionError {
    SessionError::Storage(format!("{:?}", err))
}

fn network_error(err: gloo_net::Error) -> SessionError {
    SessionError::Network(err.to_string())
}

/// `window.localStorage`, holding raw (not JSON-quoted) strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(storage_error)
    }
}

/// `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        let response = match body {
            Some(body) => builder.body(body).map_err(network_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok(HttpResponse { status, body })
    }
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window; cannot redirect to {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            tracing::error!("Redirect to {} failed: {:?}", path, e);
        }
    }
}
