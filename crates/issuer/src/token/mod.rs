//! Authorization token issuance.
//!
//! A token is the salted AES envelope of
//!
//! ```text
//! private_key || public_key || "FR-" || <epoch millis>
//! ```
//!
//! encrypted under the encryption key. Nothing is retained between calls.

pub mod clock;
pub mod issuer;
pub mod reference;
pub mod secrets;

use common::ServiceError;
use thiserror::Error;

use crate::crypto::CipherError;

pub use clock::{Clock, FixedClock, SystemClock};
pub use issuer::{IssuedToken, TokenIssuer};
pub use reference::ReferenceId;
pub use secrets::{IssuerSecrets, Secret};

/// Errors produced by the token layer.
#[derive(Debug, Error)]
pub enum IssueError {
    /// A required secret is missing or empty.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The cipher layer failed to produce an envelope.
    #[error("encryption failed: {0}")]
    Encryption(#[from] CipherError),
}

impl From<IssueError> for ServiceError {
    fn from(err: IssueError) -> Self {
        match err {
            IssueError::Configuration(msg) => ServiceError::Configuration(msg),
            IssueError::Encryption(e) => ServiceError::EncryptionFailure(e.to_string()),
        }
    }
}
