//! `FR-<millis>` reference identifiers.

use std::fmt;

/// Prefix of every reference identifier.
pub const REFERENCE_PREFIX: &str = "FR-";

/// Per-issuance identifier embedded in the authorization payload.
///
/// Two issuances within the same millisecond share an identifier; the salted
/// envelope still differs between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Build the identifier for `millis` since the Unix epoch.
    pub fn from_millis(millis: u64) -> Self {
        Self(format!("{REFERENCE_PREFIX}{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse the embedded timestamp back out of the identifier.
    pub fn timestamp_millis(&self) -> Option<u64> {
        self.0.strip_prefix(REFERENCE_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReferenceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_prefix() {
        let id = ReferenceId::from_millis(1_700_000_000_000);
        assert_eq!(id.as_str(), "FR-1700000000000");
        assert_eq!(id.to_string(), "FR-1700000000000");
    }

    #[test]
    fn epoch_zero() {
        assert_eq!(ReferenceId::from_millis(0).as_str(), "FR-0");
    }

    #[test]
    fn timestamp_round_trips() {
        let id = ReferenceId::from_millis(1_700_000_000_123);
        assert_eq!(id.timestamp_millis(), Some(1_700_000_000_123));
    }

    #[test]
    fn only_digits_follow_prefix() {
        let id = ReferenceId::from_millis(u64::MAX);
        let digits = id.as_str().strip_prefix(REFERENCE_PREFIX).unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
