//! Remote command interpreter
//!
//! Applies a decoded command to the targeted button output immediately.
//! No queuing and no debounce: remote presses are intentional, unlike
//! physical contacts. Unknown lines never reach this point.

use crate::channel::OutputChannel;
use crate::hal::OutputPort;
use crate::protocol::{Action, ButtonOutput, RemoteCommand};

/// Drive the targeted output to the commanded level.
///
/// With `indicator` enabled the status indicator follows the power button
/// output in lock-step, whatever the assertion source.
pub fn apply(cmd: RemoteCommand, port: &mut dyn OutputPort, indicator: bool) {
    let level = matches!(cmd.action, Action::Assert);

    match cmd.target {
        ButtonOutput::Reset => port.write(OutputChannel::MbResetButton, level),
        ButtonOutput::Power => {
            port.write(OutputChannel::MbPowerButton, level);
            if indicator {
                port.write(OutputChannel::StatusIndicator, level);
            }
        }
    }
}
