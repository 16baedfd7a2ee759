//! Token codec: read the claims out of a JWT without verifying it.
//!
//! Signature verification is the backend's job. A successful [`decode`] says
//! nothing about authenticity; it only makes the subject and expiry
//! available for display and expiry checks.

use crate::error::DecodeError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded, unverified token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, typically the username.
    #[serde(rename = "sub")]
    pub subject: String,
    /// Expiry, epoch seconds.
    #[serde(rename = "exp")]
    pub expires_at: i64,
    /// Every other claim in the payload, of any JSON type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// True if the token is still usable at `now` (epoch seconds).
    pub fn is_live_at(&self, now: i64) -> bool {
        self.expires_at > now
    }

    /// The `role` claim, when the backend sends it as a plain string.
    pub fn role(&self) -> Option<&str> {
        self.extra.get("role").and_then(Value::as_str)
    }
}

/// Decodes the middle segment of a `header.payload.signature` token.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    // Padding is optional in JWTs; accept it if present.
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| DecodeError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| DecodeError::Claims(e.to_string()))
}
