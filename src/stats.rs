//! Bridge traffic counters.
//!
//! Shared between the receive path and the tick loop, readable at any
//! time for diagnostics. All access via atomics, no locks.

use core::sync::atomic::{AtomicU32, Ordering};

/// Cumulative counters since boot. Never cleared.
pub struct BridgeStats {
    lines_rx: AtomicU32,
    commands_applied: AtomicU32,
    lines_unknown: AtomicU32,
    overflows: AtomicU32,
    reports_tx: AtomicU32,
    heartbeats_tx: AtomicU32,
}

impl BridgeStats {
    pub const fn new() -> Self {
        Self {
            lines_rx: AtomicU32::new(0),
            commands_applied: AtomicU32::new(0),
            lines_unknown: AtomicU32::new(0),
            overflows: AtomicU32::new(0),
            reports_tx: AtomicU32::new(0),
            heartbeats_tx: AtomicU32::new(0),
        }
    }

    /// A completed inbound line was dispatched.
    #[inline]
    pub fn note_line(&self) {
        self.lines_rx.fetch_add(1, Ordering::Relaxed);
    }

    /// A decoded command was applied to an output.
    #[inline]
    pub fn note_command(&self) {
        self.commands_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// A completed line matched nothing in the vocabulary.
    #[inline]
    pub fn note_unknown(&self) {
        self.lines_unknown.fetch_add(1, Ordering::Relaxed);
    }

    /// An inbound line was truncated at the capacity bound.
    #[inline]
    pub fn note_overflow(&self) {
        self.overflows.fetch_add(1, Ordering::Relaxed);
    }

    /// A status line was sent because state changed.
    #[inline]
    pub fn note_report(&self) {
        self.reports_tx.fetch_add(1, Ordering::Relaxed);
    }

    /// A status line was sent by the heartbeat timer alone.
    #[inline]
    pub fn note_heartbeat(&self) {
        self.heartbeats_tx.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lines_rx(&self) -> u32 {
        self.lines_rx.load(Ordering::Relaxed)
    }

    pub fn commands_applied(&self) -> u32 {
        self.commands_applied.load(Ordering::Relaxed)
    }

    pub fn lines_unknown(&self) -> u32 {
        self.lines_unknown.load(Ordering::Relaxed)
    }

    pub fn overflows(&self) -> u32 {
        self.overflows.load(Ordering::Relaxed)
    }

    pub fn reports_tx(&self) -> u32 {
        self.reports_tx.load(Ordering::Relaxed)
    }

    pub fn heartbeats_tx(&self) -> u32 {
        self.heartbeats_tx.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lines_rx: self.lines_rx(),
            commands_applied: self.commands_applied(),
            lines_unknown: self.lines_unknown(),
            overflows: self.overflows(),
            reports_tx: self.reports_tx(),
            heartbeats_tx: self.heartbeats_tx(),
        }
    }
}

impl Default for BridgeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter values at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub lines_rx: u32,
    pub commands_applied: u32,
    pub lines_unknown: u32,
    pub overflows: u32,
    pub reports_tx: u32,
    pub heartbeats_tx: u32,
}
