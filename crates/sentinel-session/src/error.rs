//! Error types for sentinel-session.

use thiserror::Error;

/// Result type for session and API operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Message used when a failed response carries no readable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed.";

/// Reasons a token could not be turned into [`Claims`](crate::Claims).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token did not have exactly three dot-separated segments.
    #[error("Malformed token: expected 3 segments, found {0}")]
    SegmentCount(usize),

    /// The payload segment was not valid base64url.
    #[error("Malformed token: invalid payload encoding ({0})")]
    Encoding(String),

    /// The payload decoded but was not a valid claims object.
    #[error("Malformed token: invalid claims ({0})")]
    Claims(String),
}

/// Errors surfaced by the token store, guard and API client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A credential was required but none is stored.
    #[error("No authentication token found")]
    Unauthenticated,

    /// The stored token could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The stored token decoded but its `exp` is not in the future.
    #[error("Session expired at {expired_at}")]
    SessionExpired {
        /// Expiry claim of the rejected token, epoch seconds.
        expired_at: i64,
    },

    /// The backend refused the supplied username and password.
    #[error("Invalid credentials")]
    CredentialsRejected,

    /// Non-success HTTP response. Displays exactly the server-supplied
    /// message, or [`GENERIC_FAILURE_MESSAGE`].
    #[error("{0}")]
    RequestFailed(String),

    /// Transport failure before any response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    /// The persistent key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}
