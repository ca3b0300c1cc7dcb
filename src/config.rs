//! Bridge configuration.
//!
//! One engine, parameterized. The two deployed wirings differ only in
//! whether chassis hardware is connected, so they are constructors on the
//! same config rather than separate builds. Fixed after startup.

use crate::debounce::DEBOUNCE_WINDOW_US;

/// Target loop cadence in microseconds (10 ms).
pub const TICK_PERIOD_US: i64 = 10_000;

/// Idle status line interval in microseconds (1 s).
pub const HEARTBEAT_INTERVAL_US: i64 = 1_000_000;

/// Watchdog service interval in microseconds (1 s).
pub const WATCHDOG_FEED_INTERVAL_US: i64 = 1_000_000;

/// Hardware watchdog timeout in milliseconds (~8.4 s).
pub const WATCHDOG_TIMEOUT_MS: u32 = 8_388;

/// Runtime configuration of the bridge engine.
#[derive(Clone, Copy, Debug)]
pub struct BridgeConfig {
    /// Forward case buttons to the motherboard header and motherboard
    /// LEDs to the case, each tick.
    pub chassis_passthrough: bool,

    /// Mirror the power button output on the status indicator.
    pub power_indicator: bool,

    /// Debounce window for case buttons, microseconds.
    pub debounce_window_us: i64,

    /// Idle status line interval, microseconds.
    pub heartbeat_interval_us: i64,

    /// Watchdog service interval, microseconds.
    pub watchdog_feed_interval_us: i64,

    /// Loop cadence hint for the shell, microseconds.
    pub tick_period_us: i64,
}

impl BridgeConfig {
    /// Bridge wired to the motherboard only; remote commands are the
    /// sole source of button presses.
    pub const fn headless() -> Self {
        Self {
            chassis_passthrough: false,
            power_indicator: true,
            debounce_window_us: DEBOUNCE_WINDOW_US,
            heartbeat_interval_us: HEARTBEAT_INTERVAL_US,
            watchdog_feed_interval_us: WATCHDOG_FEED_INTERVAL_US,
            tick_period_us: TICK_PERIOD_US,
        }
    }

    /// Bridge wired between motherboard and chassis panel.
    pub const fn with_chassis() -> Self {
        Self {
            chassis_passthrough: true,
            ..Self::headless()
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::with_chassis()
    }
}
