//! Wire types for the Sentinel backend.

use serde::{Deserialize, Serialize};

/// `POST /token` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// `POST /chat` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /chat` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body returned with non-success statuses, when the backend sends one.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}
