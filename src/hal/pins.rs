//! Pin assignment
//!
//! Declarative wiring map, fixed at initialization. The defaults are the
//! reference board's wiring.

use crate::channel::{InputChannel, OutputChannel};

/// Serial link baud rate (8-N-1, no flow control).
pub const BAUD_RATE: u32 = 115_200;

/// GPIO assignment for every channel plus the serial link.
#[derive(Clone, Copy, Debug)]
pub struct PinMap {
    pub uart_tx: i32,
    pub uart_rx: i32,

    // Outputs to motherboard
    pub mb_reset_button: i32,
    pub mb_power_button: i32,

    // Inputs from motherboard LED headers
    pub mb_hdd_led: i32,
    pub mb_power_led: i32,

    // Inputs from case buttons
    pub case_reset_button: i32,
    pub case_power_button: i32,

    // Outputs to case LEDs
    pub case_hdd_led: i32,
    pub case_power_led: i32,

    // On-board status indicator
    pub status_indicator: i32,
}

impl PinMap {
    /// Reference board wiring.
    pub const fn reference() -> Self {
        Self {
            uart_tx: 16,
            uart_rx: 17,
            mb_reset_button: 18,
            mb_power_button: 19,
            mb_hdd_led: 20,
            mb_power_led: 21,
            case_reset_button: 22,
            case_power_button: 26,
            case_hdd_led: 27,
            case_power_led: 28,
            status_indicator: 25,
        }
    }

    /// GPIO number for a sensed channel.
    pub const fn input(&self, channel: InputChannel) -> i32 {
        match channel {
            InputChannel::MbHddLed => self.mb_hdd_led,
            InputChannel::MbPowerLed => self.mb_power_led,
            InputChannel::CaseResetButton => self.case_reset_button,
            InputChannel::CasePowerButton => self.case_power_button,
        }
    }

    /// GPIO number for a driven channel.
    pub const fn output(&self, channel: OutputChannel) -> i32 {
        match channel {
            OutputChannel::MbResetButton => self.mb_reset_button,
            OutputChannel::MbPowerButton => self.mb_power_button,
            OutputChannel::CaseHddLed => self.case_hdd_led,
            OutputChannel::CasePowerLed => self.case_power_led,
            OutputChannel::StatusIndicator => self.status_indicator,
        }
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_map_is_collision_free() {
        let map = PinMap::reference();
        let pins = [
            map.uart_tx,
            map.uart_rx,
            map.mb_reset_button,
            map.mb_power_button,
            map.mb_hdd_led,
            map.mb_power_led,
            map.case_reset_button,
            map.case_power_button,
            map.case_hdd_led,
            map.case_power_led,
            map.status_indicator,
        ];
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b, "pin assigned twice");
            }
        }
    }

    #[test]
    fn test_channel_lookup() {
        let map = PinMap::reference();
        assert_eq!(map.input(InputChannel::MbHddLed), 20);
        assert_eq!(map.input(InputChannel::CasePowerButton), 26);
        assert_eq!(map.output(OutputChannel::MbResetButton), 18);
        assert_eq!(map.output(OutputChannel::StatusIndicator), 25);
    }
}
