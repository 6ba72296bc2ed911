//! The three process-wide secrets an issuer needs.

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::reference::ReferenceId;
use super::IssueError;

/// A secret string. Redacted in `Debug` output and zeroed on drop.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `true` when the value is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

/// Encryption passphrase plus the two opaque payload fragments.
///
/// `private_key` and `public_key` are application secrets concatenated into
/// the payload; they are not an asymmetric key pair.
#[derive(Debug, Clone)]
pub struct IssuerSecrets {
    encryption_key: Secret,
    private_key: Secret,
    public_key: Secret,
}

impl IssuerSecrets {
    /// Validate and bundle the three secrets.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Configuration`] naming the first secret that is
    /// empty or whitespace-only.
    pub fn new(
        encryption_key: Secret,
        private_key: Secret,
        public_key: Secret,
    ) -> Result<Self, IssueError> {
        for (secret, name) in [
            (&encryption_key, "encryption key"),
            (&private_key, "private key"),
            (&public_key, "public key"),
        ] {
            if secret.is_blank() {
                return Err(IssueError::Configuration(format!(
                    "{name} is required and must not be empty"
                )));
            }
        }
        Ok(Self {
            encryption_key,
            private_key,
            public_key,
        })
    }

    pub fn encryption_key(&self) -> &Secret {
        &self.encryption_key
    }

    /// `private_key || public_key || reference_id`, no separators.
    pub fn payload(&self, reference_id: &ReferenceId) -> Zeroizing<String> {
        let mut payload = Zeroizing::new(String::with_capacity(
            self.private_key.0.len() + self.public_key.0.len() + reference_id.as_str().len(),
        ));
        payload.push_str(self.private_key.expose());
        payload.push_str(self.public_key.expose());
        payload.push_str(reference_id.as_str());
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets(enc: &str, private: &str, public: &str) -> Result<IssuerSecrets, IssueError> {
        IssuerSecrets::new(Secret::new(enc), Secret::new(private), Secret::new(public))
    }

    #[test]
    fn payload_is_plain_concatenation() {
        let s = secrets("k1", "priv", "pub").unwrap();
        let id = ReferenceId::from_millis(1_700_000_000_000);
        assert_eq!(s.payload(&id).as_str(), "privpubFR-1700000000000");
    }

    #[test]
    fn rejects_each_missing_secret() {
        for (enc, private, public, name) in [
            ("", "priv", "pub", "encryption key"),
            ("k1", "", "pub", "private key"),
            ("k1", "priv", "", "public key"),
            ("k1", "priv", "   ", "public key"),
        ] {
            let err = secrets(enc, private, public).unwrap_err();
            assert!(matches!(err, IssueError::Configuration(_)));
            assert!(err.to_string().contains(name), "{err} should name {name}");
        }
    }

    #[test]
    fn debug_never_shows_values() {
        let s = secrets("k1-super", "priv-super", "pub-super").unwrap();
        let rendered = format!("{s:?}");
        assert!(!rendered.contains("super"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn secret_deserialises_from_plain_string() {
        let secret: Secret = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(secret.expose(), "abc");
    }
}
