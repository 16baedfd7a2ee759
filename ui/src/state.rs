//! Session context for the component tree.

use crate::platform::{BrowserNavigator, FetchTransport, LocalStorageStore};
use sentinel_session::{ApiConfig, SessionContext, SystemClock};
use std::sync::Arc;

/// Builds the browser session. The backend origin is fixed at build time
/// from `SENTINEL_API_BASE_URL`.
pub fn browser_session() -> SessionContext {
    let config = ApiConfig::new(option_env!("SENTINEL_API_BASE_URL"));
    tracing::info!(api = config.base_url(), "Starting Sentinel UI");

    SessionContext::new(
        config,
        Arc::new(LocalStorageStore),
        Arc::new(FetchTransport),
        Arc::new(BrowserNavigator),
        Arc::new(SystemClock),
    )
}
