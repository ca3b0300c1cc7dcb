//! Module: channel
//!
//! Purpose: static description of the logical signals the bridge moves
//! between the motherboard header, the chassis panel and the serial link.
//!
//! Architecture:
//! - Channels are fixed at configuration time, never created at runtime
//! - Polarity captures pull-up wiring (active-low inputs read electrically
//!   false when logically active)
//! - PanelSnapshot is the composite state reported over the wire
//!
//! Safety: Safe. No unsafe blocks. Copy types only.

/// Electrical polarity of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Logical true is driven/read as electrical high.
    ActiveHigh,
    /// Logical true is driven/read as electrical low (pull-up wiring).
    ActiveLow,
}

impl Polarity {
    /// Map a raw electrical level to its logical value.
    #[inline]
    pub const fn logical(self, raw: bool) -> bool {
        raw ^ matches!(self, Polarity::ActiveLow)
    }
}

/// Direction of a channel as seen from the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Sensed from hardware (LED header, panel button).
    InputSensed,
    /// Driven to hardware (button header, panel LED).
    OutputDriven,
}

/// Fixed per-channel configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChannelDef {
    pub role: Role,
    pub polarity: Polarity,
    /// Mechanical contacts bounce; only externally wired buttons need
    /// a debounce filter in front of them.
    pub debounced: bool,
}

/// Signals the bridge senses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputChannel {
    /// Motherboard HDD activity LED header.
    MbHddLed,
    /// Motherboard power LED header.
    MbPowerLed,
    /// Chassis reset button.
    CaseResetButton,
    /// Chassis power button.
    CasePowerButton,
}

impl InputChannel {
    pub const fn def(self) -> ChannelDef {
        match self {
            // LED headers sit behind pull-ups: lit reads electrically low.
            InputChannel::MbHddLed | InputChannel::MbPowerLed => ChannelDef {
                role: Role::InputSensed,
                polarity: Polarity::ActiveLow,
                debounced: false,
            },
            // Mechanical buttons, also pulled up.
            InputChannel::CaseResetButton | InputChannel::CasePowerButton => ChannelDef {
                role: Role::InputSensed,
                polarity: Polarity::ActiveLow,
                debounced: true,
            },
        }
    }

    #[inline]
    pub const fn polarity(self) -> Polarity {
        self.def().polarity
    }
}

/// Signals the bridge drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputChannel {
    /// Motherboard reset button header.
    MbResetButton,
    /// Motherboard power button header.
    MbPowerButton,
    /// Chassis HDD activity LED.
    CaseHddLed,
    /// Chassis power LED.
    CasePowerLed,
    /// On-board status indicator.
    StatusIndicator,
}

impl OutputChannel {
    pub const fn def(self) -> ChannelDef {
        ChannelDef {
            role: Role::OutputDriven,
            polarity: Polarity::ActiveHigh,
            debounced: false,
        }
    }
}

/// Composite state reported over the serial link.
///
/// Field order is the wire order: HDD-LED, Power-LED, Reset-button,
/// Power-button. The order is part of the protocol contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSnapshot {
    /// HDD activity LED, logical.
    pub hdd_led: bool,
    /// Power LED, logical.
    pub power_led: bool,
    /// Reset button output, as currently driven.
    pub reset_button: bool,
    /// Power button output, as currently driven.
    pub power_button: bool,
}

impl PanelSnapshot {
    /// All signals inactive. Startup value, before anything is sensed.
    pub const INACTIVE: Self = Self {
        hdd_led: false,
        power_led: false,
        reset_button: false,
        power_button: false,
    };

    /// Reported values in wire order.
    #[inline]
    pub const fn as_array(&self) -> [bool; 4] {
        [
            self.hdd_led,
            self.power_led,
            self.reset_button,
            self.power_button,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_logical() {
        assert!(Polarity::ActiveHigh.logical(true));
        assert!(!Polarity::ActiveHigh.logical(false));
        // Pull-up wiring: electrically low means logically active.
        assert!(Polarity::ActiveLow.logical(false));
        assert!(!Polarity::ActiveLow.logical(true));
    }

    #[test]
    fn test_led_inputs_are_active_low() {
        for ch in [InputChannel::MbHddLed, InputChannel::MbPowerLed] {
            let def = ch.def();
            assert_eq!(def.polarity, Polarity::ActiveLow);
            assert_eq!(def.role, Role::InputSensed);
            assert!(!def.debounced);
        }
    }

    #[test]
    fn test_only_case_buttons_are_debounced() {
        assert!(InputChannel::CaseResetButton.def().debounced);
        assert!(InputChannel::CasePowerButton.def().debounced);
        assert!(!InputChannel::MbHddLed.def().debounced);
        assert!(!InputChannel::MbPowerLed.def().debounced);
    }

    #[test]
    fn test_outputs_are_active_high() {
        for ch in [
            OutputChannel::MbResetButton,
            OutputChannel::MbPowerButton,
            OutputChannel::CaseHddLed,
            OutputChannel::CasePowerLed,
            OutputChannel::StatusIndicator,
        ] {
            let def = ch.def();
            assert_eq!(def.polarity, Polarity::ActiveHigh);
            assert_eq!(def.role, Role::OutputDriven);
            assert!(!def.debounced);
        }
    }

    #[test]
    fn test_snapshot_inactive() {
        let snap = PanelSnapshot::INACTIVE;
        assert_eq!(snap.as_array(), [false; 4]);
    }

    #[test]
    fn test_snapshot_wire_order() {
        let snap = PanelSnapshot {
            hdd_led: true,
            power_led: false,
            reset_button: true,
            power_button: false,
        };
        assert_eq!(snap.as_array(), [true, false, true, false]);
    }
}
