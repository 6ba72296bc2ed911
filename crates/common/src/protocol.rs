//! Response types returned by the token issuer.
//!
//! All bodies are serialised as JSON.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

// ---------------------------------------------------------------------------
// Issue endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Salted, base64-encoded ciphertext of the authorization payload.
    pub token: String,
    /// `FR-<epoch millis>` identifier embedded in the payload.
    ///
    /// Serialised as `refrence_id`; existing consumers read that exact key.
    #[serde(rename = "refrence_id")]
    pub reference_id: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"encryption_failure"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub reason: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and reason.
    pub fn new(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            reason: reason.into(),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    /// Uses a fixed, caller-safe reason per variant; the inner detail stays in logs.
    fn from(err: &ServiceError) -> Self {
        let reason = match err {
            ServiceError::NotFound(_) => "the requested resource does not exist",
            ServiceError::Configuration(_) => "service is not configured",
            ServiceError::EncryptionFailure(_) => "token encryption failed",
            ServiceError::Internal(_) => "internal error",
        };
        Self::new(err.code(), reason)
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
}
