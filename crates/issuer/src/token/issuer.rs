//! [`TokenIssuer`]: builds, encrypts, and returns one authorization token per call.

use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::reference::ReferenceId;
use super::secrets::IssuerSecrets;
use super::IssueError;
use crate::crypto::encrypt_with_passphrase;

/// One issued `(reference id, token)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub reference_id: ReferenceId,
    /// Salted base64 envelope of the authorization payload.
    pub token: String,
}

/// Stateless token issuer.
///
/// Holds only read-only secrets and a clock, so a single instance can be
/// shared behind an `Arc` and called from any number of tasks at once.
#[derive(Clone)]
pub struct TokenIssuer {
    secrets: IssuerSecrets,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(secrets: IssuerSecrets, clock: Arc<dyn Clock>) -> Self {
        Self { secrets, clock }
    }

    /// Issuer reading the host wall clock.
    pub fn with_system_clock(secrets: IssuerSecrets) -> Self {
        Self::new(secrets, Arc::new(SystemClock))
    }

    /// Issue a fresh token.
    ///
    /// Reads the clock once, builds `private_key || public_key || FR-<millis>`
    /// and encrypts it under the encryption key with a random salt.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Encryption`] if the cipher layer fails. No partial
    /// or unencrypted token is ever returned.
    pub fn issue(&self) -> Result<IssuedToken, IssueError> {
        let reference_id = ReferenceId::from_millis(self.clock.now_millis());
        let payload = self.secrets.payload(&reference_id);
        let envelope = encrypt_with_passphrase(
            payload.as_bytes(),
            self.secrets.encryption_key().expose().as_bytes(),
        )?;

        Ok(IssuedToken {
            reference_id,
            token: envelope.to_string_repr(),
        })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secrets", &self.secrets)
            .finish_non_exhaustive()
    }
}
