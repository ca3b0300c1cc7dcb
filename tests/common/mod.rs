//! Fake hardware for the integration tests.
#![allow(dead_code)]

use atx_bridge::channel::{InputChannel, OutputChannel, Polarity};
use atx_bridge::hal::{OutputPort, PanelIo, StatusLink, Watchdog};

/// In-memory panel: inputs are set by the test, outputs are recorded.
pub struct FakePanel {
    mb_hdd_led: bool,
    mb_power_led: bool,
    case_reset_button: bool,
    case_power_button: bool,

    mb_reset_out: bool,
    mb_power_out: bool,
    case_hdd_out: bool,
    case_power_out: bool,
    indicator_out: bool,

    pub writes: Vec<(OutputChannel, bool)>,
}

impl FakePanel {
    /// All inputs at their electrically idle level. The LED headers and
    /// buttons sit behind pull-ups, so idle reads electrically high.
    pub fn idle() -> Self {
        Self {
            mb_hdd_led: true,
            mb_power_led: true,
            case_reset_button: true,
            case_power_button: true,
            mb_reset_out: false,
            mb_power_out: false,
            case_hdd_out: false,
            case_power_out: false,
            indicator_out: false,
            writes: Vec::new(),
        }
    }

    /// Set a raw electrical input level.
    pub fn set_raw(&mut self, ch: InputChannel, level: bool) {
        match ch {
            InputChannel::MbHddLed => self.mb_hdd_led = level,
            InputChannel::MbPowerLed => self.mb_power_led = level,
            InputChannel::CaseResetButton => self.case_reset_button = level,
            InputChannel::CasePowerButton => self.case_power_button = level,
        }
    }

    /// Set an input by logical value, applying the channel's polarity.
    pub fn set_logical(&mut self, ch: InputChannel, active: bool) {
        let raw = match ch.polarity() {
            Polarity::ActiveLow => !active,
            Polarity::ActiveHigh => active,
        };
        self.set_raw(ch, raw);
    }

    pub fn output(&self, ch: OutputChannel) -> bool {
        match ch {
            OutputChannel::MbResetButton => self.mb_reset_out,
            OutputChannel::MbPowerButton => self.mb_power_out,
            OutputChannel::CaseHddLed => self.case_hdd_out,
            OutputChannel::CasePowerLed => self.case_power_out,
            OutputChannel::StatusIndicator => self.indicator_out,
        }
    }
}

impl OutputPort for FakePanel {
    fn write(&mut self, channel: OutputChannel, level: bool) {
        match channel {
            OutputChannel::MbResetButton => self.mb_reset_out = level,
            OutputChannel::MbPowerButton => self.mb_power_out = level,
            OutputChannel::CaseHddLed => self.case_hdd_out = level,
            OutputChannel::CasePowerLed => self.case_power_out = level,
            OutputChannel::StatusIndicator => self.indicator_out = level,
        }
        self.writes.push((channel, level));
    }
}

impl PanelIo for FakePanel {
    fn read_input(&mut self, channel: InputChannel) -> bool {
        match channel {
            InputChannel::MbHddLed => self.mb_hdd_led,
            InputChannel::MbPowerLed => self.mb_power_led,
            InputChannel::CaseResetButton => self.case_reset_button,
            InputChannel::CasePowerButton => self.case_power_button,
        }
    }

    fn read_output(&mut self, channel: OutputChannel) -> bool {
        self.output(channel)
    }
}

/// Records every transmitted line.
#[derive(Default)]
pub struct FakeLink {
    pub sent: Vec<Vec<u8>>,
}

impl StatusLink for FakeLink {
    fn send(&mut self, line: &[u8]) {
        self.sent.push(line.to_vec());
    }
}

/// Counts watchdog feeds.
#[derive(Default)]
pub struct FakeWatchdog {
    pub feeds: u32,
}

impl Watchdog for FakeWatchdog {
    fn feed(&mut self) {
        self.feeds += 1;
    }
}
