//! Wall-clock abstraction and local-date derivation.
//!
//! The engine's only time dependency is a single `now()` read in epoch
//! milliseconds. The [`Clock`] trait injects that read so the event handler
//! stays deterministic under test: production code uses [`SystemClock`],
//! tests pin time with [`FixedClock`].

use chrono::{DateTime, Local, Utc};

/// Source of the current wall-clock time in epoch milliseconds.
///
/// The countdown itself is driven by an external timer facility; the engine
/// only compares `now_ms()` against the stored target timestamp.
pub trait Clock {
    /// Current time as milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at a fixed instant, for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The instant this clock always reports.
    pub now_ms: i64,
}

impl FixedClock {
    /// Creates a clock pinned at `now_ms`.
    #[must_use]
    pub const fn new(now_ms: i64) -> Self {
        Self { now_ms }
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }
}

/// Formats an epoch-millisecond instant as a local-calendar `YYYY-MM-DD` date.
///
/// This is the date written into work log entries and compared during the
/// stale-entry purge. Out-of-range timestamps clamp to the epoch date rather
/// than failing; the engine has no fatal paths.
///
/// # Examples
///
/// ```
/// use pomolog::infrastructure::local_date_string;
///
/// let date = local_date_string(0);
/// assert_eq!(date.len(), 10);
/// assert_eq!(&date[4..5], "-");
/// ```
#[must_use]
pub fn local_date_string(now_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(now_ms).map_or_else(
        || "1970-01-01".to_string(),
        |utc| utc.with_timezone(&Local).format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_pinned_instant() {
        let clock = FixedClock::new(1_756_000_000_000);
        assert_eq!(clock.now_ms(), 1_756_000_000_000);
    }

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z in epoch milliseconds.
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn local_date_is_stable_within_the_same_instant() {
        let ms = 1_756_100_000_000;
        assert_eq!(local_date_string(ms), local_date_string(ms));
    }

    #[test]
    fn out_of_range_timestamp_clamps_to_epoch_date() {
        assert_eq!(local_date_string(i64::MAX), "1970-01-01");
    }
}
