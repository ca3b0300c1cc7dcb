//! Inbound command vocabulary
//!
//! Four literal lines, matched exactly including the trailing line feed.
//! Anything else is not a protocol error, just unrecognized.

/// Button output a command targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonOutput {
    Reset,
    Power,
}

/// What to do with the targeted output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Drive the output electrically asserted.
    Assert,
    /// Drive the output electrically released.
    Release,
}

/// A decoded remote instruction. Consumed immediately, never retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteCommand {
    pub target: ButtonOutput,
    pub action: Action,
}

impl RemoteCommand {
    pub const fn new(target: ButtonOutput, action: Action) -> Self {
        Self { target, action }
    }
}

/// Decode one completed line.
///
/// Exact byte equality against the command vocabulary; a truncated line
/// (no terminator) can never match. `None` means unrecognized.
pub fn decode(line: &[u8]) -> Option<RemoteCommand> {
    match line {
        b"BTN_RST_ON\n" => Some(RemoteCommand::new(ButtonOutput::Reset, Action::Assert)),
        b"BTN_RST_OFF\n" => Some(RemoteCommand::new(ButtonOutput::Reset, Action::Release)),
        b"BTN_PWR_ON\n" => Some(RemoteCommand::new(ButtonOutput::Power, Action::Assert)),
        b"BTN_PWR_OFF\n" => Some(RemoteCommand::new(ButtonOutput::Power, Action::Release)),
        _ => None,
    }
}
