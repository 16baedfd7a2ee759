//! Per-page request state.

use crate::error::SessionError;

/// The mutually exclusive states of a page that issues one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Starts a submission. Returns `false`, leaving the state alone, if one
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = ViewState::Loading;
        true
    }

    /// Records the outcome of the in-flight call.
    pub fn settle(&mut self, result: Result<T, SessionError>) {
        *self = match result {
            Ok(value) => ViewState::Success(value),
            Err(e) => ViewState::Error(e.to_string()),
        };
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}
