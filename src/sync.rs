//! Module: sync
//!
//! Purpose: the bridge control loop body. Each tick samples the panel,
//! drives the optional chassis pass-through, and reports state over the
//! serial link on change or heartbeat.
//!
//! Architecture:
//! - All mutable loop state lives in BridgeEngine, owned by the shell
//! - Hardware access only through the hal traits
//! - "Changed" is measured against the last snapshot actually sent, so
//!   values that revert between sends never produce duplicate lines
//! - Watchdog service is decoupled from reporting: liveness must not
//!   depend on protocol traffic
//!
//! Safety: Safe. No unsafe blocks. Nothing here blocks or suspends.

use crate::channel::{InputChannel, OutputChannel, PanelSnapshot};
use crate::config::BridgeConfig;
use crate::debounce::Debouncer;
use crate::hal::{OutputPort, PanelIo, StatusLink, Watchdog};
use crate::log_debug;
use crate::logging::LogRing;
use crate::protocol::status;
use crate::stats::BridgeStats;

/// Control loop state. One instance lives for the whole process.
pub struct BridgeEngine<'a> {
    cfg: BridgeConfig,
    stats: &'a BridgeStats,
    log: &'a LogRing,

    // Per-button filters for the chassis pass-through path
    rst_filter: Debouncer,
    pwr_filter: Debouncer,

    // Last transmitted state
    last_sent: PanelSnapshot,
    last_sent_us: i64,

    // Watchdog cadence, independent of transmission
    last_fed_us: i64,
}

impl<'a> BridgeEngine<'a> {
    pub fn new(cfg: BridgeConfig, stats: &'a BridgeStats, log: &'a LogRing) -> Self {
        Self {
            cfg,
            stats,
            log,
            rst_filter: Debouncer::with_window(cfg.debounce_window_us),
            pwr_filter: Debouncer::with_window(cfg.debounce_window_us),
            last_sent: PanelSnapshot::INACTIVE,
            last_sent_us: 0,
            last_fed_us: 0,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.cfg
    }

    /// Last snapshot transmitted over the link.
    pub fn last_sent(&self) -> PanelSnapshot {
        self.last_sent
    }

    /// Run one tick of the control loop.
    ///
    /// Target cadence is [`tick_period_us`](BridgeConfig::tick_period_us);
    /// the debounce filters assume the caller polls materially faster than
    /// the debounce window.
    pub fn tick(
        &mut self,
        now_us: i64,
        io: &mut impl PanelIo,
        link: &mut impl StatusLink,
        watchdog: &mut impl Watchdog,
    ) {
        // Sample the reported channels first: motherboard LED headers
        // (logical, behind pull-ups) and the button outputs as currently
        // driven. A pass-through write this tick is reported next tick.
        let snapshot = PanelSnapshot {
            hdd_led: InputChannel::MbHddLed
                .polarity()
                .logical(io.read_input(InputChannel::MbHddLed)),
            power_led: InputChannel::MbPowerLed
                .polarity()
                .logical(io.read_input(InputChannel::MbPowerLed)),
            reset_button: io.read_output(OutputChannel::MbResetButton),
            power_button: io.read_output(OutputChannel::MbPowerButton),
        };

        if self.cfg.chassis_passthrough {
            self.drive_passthrough(now_us, io, &snapshot);
        }

        // Report on change, or on the heartbeat so an idle link still
        // proves liveness.
        let changed = snapshot != self.last_sent;
        if changed || now_us - self.last_sent_us > self.cfg.heartbeat_interval_us {
            let line = status::encode(&snapshot);
            link.send(&line);
            self.last_sent = snapshot;
            self.last_sent_us = now_us;

            if changed {
                self.stats.note_report();
            } else {
                self.stats.note_heartbeat();
            }
            log_debug!(
                self.log,
                now_us,
                "tx {}{}{}{}",
                snapshot.hdd_led as u8,
                snapshot.power_led as u8,
                snapshot.reset_button as u8,
                snapshot.power_button as u8
            );
        }

        if now_us - self.last_fed_us > self.cfg.watchdog_feed_interval_us {
            watchdog.feed();
            self.last_fed_us = now_us;
        }
    }

    /// Forward motherboard LEDs to the case and debounced case buttons to
    /// the motherboard header. Pure side effect, independent of reporting.
    fn drive_passthrough(&mut self, now_us: i64, io: &mut impl PanelIo, snapshot: &PanelSnapshot) {
        io.write(OutputChannel::CaseHddLed, snapshot.hdd_led);
        io.write(OutputChannel::CasePowerLed, snapshot.power_led);

        let rst_raw = InputChannel::CaseResetButton
            .polarity()
            .logical(io.read_input(InputChannel::CaseResetButton));
        let rst = self.rst_filter.sample(rst_raw, now_us);
        io.write(OutputChannel::MbResetButton, rst);

        let pwr_raw = InputChannel::CasePowerButton
            .polarity()
            .logical(io.read_input(InputChannel::CasePowerButton));
        let pwr = self.pwr_filter.sample(pwr_raw, now_us);
        io.write(OutputChannel::MbPowerButton, pwr);
        if self.cfg.power_indicator {
            io.write(OutputChannel::StatusIndicator, pwr);
        }
    }
}
