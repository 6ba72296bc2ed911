//! Time source for reference identifiers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in milliseconds since the Unix epoch.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current time in whole milliseconds since `1970-01-01T00:00:00Z`.
    fn now_millis(&self) -> u64;
}

/// Wall-clock [`Clock`] backed by [`SystemTime`].
///
/// Not monotonic: reads follow whatever adjustments the host clock receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            // A host clock set before 1970 reads as the epoch.
            .unwrap_or(0)
    }
}

/// [`Clock`] that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2023() {
        // 2023-11-14T22:13:20Z
        assert!(SystemClock.now_millis() >= 1_700_000_000_000);
    }

    #[test]
    fn system_clock_does_not_go_backwards_between_reads() {
        let a = SystemClock.now_millis();
        let b = SystemClock.now_millis();
        assert!(a <= b);
    }

    #[test]
    fn fixed_clock_returns_its_value() {
        assert_eq!(FixedClock(42).now_millis(), 42);
    }
}
