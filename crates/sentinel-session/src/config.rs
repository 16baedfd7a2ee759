//! API endpoint configuration.

/// Environment variable overriding the backend origin.
pub const API_BASE_URL_ENV: &str = "SENTINEL_API_BASE_URL";

/// Backend origin used when no override is given.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Uses `base_url`, or the default origin when it is `None` or blank.
    /// A trailing `/` is dropped so paths can be appended directly.
    pub fn new(base_url: Option<&str>) -> Self {
        let base = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/chat`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
