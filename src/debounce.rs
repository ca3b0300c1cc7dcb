//! Mechanical button debounce filter.
//!
//! Pure logic, no hardware dependencies. Consumes raw electrical samples,
//! produces a stable logical reading. Fully testable on host.
//!
//! The filter is time-based rather than sample-counting: a new raw value is
//! committed only after it has been held continuously for the debounce
//! window, measured against the microsecond clock the caller passes in.
//! Every raw transition re-arms the window, so contact bounce never
//! stabilizes early regardless of the polling cadence.

/// Debounce window in microseconds (50 ms).
pub const DEBOUNCE_WINDOW_US: i64 = 50_000;

/// Per-channel debounce state machine.
///
/// Call [`sample`](Debouncer::sample) once per polling tick. The poll
/// interval must be materially shorter than the window (reference cadence
/// is 10 ms): the "stable for" check uses timestamps, not sample counts, so
/// a slow poller can commit a transition after a single confirming sample.
pub struct Debouncer {
    window_us: i64,
    last_raw: bool,
    last_change_us: i64,
    stable: bool,
}

impl Debouncer {
    /// Create a filter with the default window, reading inactive.
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW_US)
    }

    /// Create a filter with an explicit window in microseconds.
    pub const fn with_window(window_us: i64) -> Self {
        Self {
            window_us,
            last_raw: false,
            last_change_us: 0,
            stable: false,
        }
    }

    /// Feed one raw sample, returning the stable reading.
    ///
    /// A transition re-arms the window and leaves the stable value
    /// untouched; the new value is committed once it has held for longer
    /// than the window.
    pub fn sample(&mut self, raw: bool, now_us: i64) -> bool {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_us = now_us;
        } else if now_us - self.last_change_us > self.window_us {
            self.stable = raw;
        }
        self.stable
    }

    /// Current stable reading, without feeding a sample.
    #[inline]
    pub fn stable(&self) -> bool {
        self.stable
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_US: i64 = 10_000;

    #[test]
    fn test_starts_inactive() {
        let d = Debouncer::new();
        assert!(!d.stable());
    }

    #[test]
    fn test_held_value_commits_after_window() {
        let mut d = Debouncer::new();

        // Press at t=0; transition tick arms the window.
        assert!(!d.sample(true, 0));

        // Still inside the window: no decision yet.
        let mut t = TICK_US;
        while t <= DEBOUNCE_WINDOW_US {
            assert!(!d.sample(true, t));
            t += TICK_US;
        }

        // First tick past the window commits.
        assert!(d.sample(true, DEBOUNCE_WINDOW_US + TICK_US));
    }

    #[test]
    fn test_bounce_never_stabilizes() {
        let mut d = Debouncer::new();

        // Oscillate every tick, well inside the window, for a long while.
        let mut raw = true;
        for i in 0..100 {
            assert!(!d.sample(raw, i * TICK_US));
            raw = !raw;
        }
        assert!(!d.stable());
    }

    #[test]
    fn test_release_takes_the_same_window() {
        let mut d = Debouncer::new();

        d.sample(true, 0);
        assert!(d.sample(true, DEBOUNCE_WINDOW_US + TICK_US));

        // Release: stays pressed until the window elapses again.
        let t0 = DEBOUNCE_WINDOW_US + 2 * TICK_US;
        assert!(d.sample(false, t0));
        assert!(d.sample(false, t0 + DEBOUNCE_WINDOW_US));
        assert!(!d.sample(false, t0 + DEBOUNCE_WINDOW_US + TICK_US));
    }

    #[test]
    fn test_late_bounce_rearms_window() {
        let mut d = Debouncer::new();

        d.sample(true, 0);
        // One bounce just before the window would have elapsed.
        d.sample(false, DEBOUNCE_WINDOW_US - TICK_US);
        d.sample(true, DEBOUNCE_WINDOW_US);

        // Old deadline passed, but the bounce re-armed the timer.
        assert!(!d.sample(true, DEBOUNCE_WINDOW_US + 2 * TICK_US));

        // Window counted from the last transition commits.
        assert!(d.sample(true, DEBOUNCE_WINDOW_US + DEBOUNCE_WINDOW_US + 2 * TICK_US));
    }

    #[test]
    fn test_custom_window() {
        let mut d = Debouncer::with_window(5_000);

        d.sample(true, 0);
        assert!(!d.sample(true, 5_000));
        assert!(d.sample(true, 5_001));
    }
}
