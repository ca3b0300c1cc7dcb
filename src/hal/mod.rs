//! Hardware boundary
//!
//! The core depends on these traits only; pin electrical configuration,
//! UART and watchdog peripheral setup happen once in the shell before the
//! loop starts. No trait method can fail and none may block.

use crate::channel::{InputChannel, OutputChannel};

pub mod pins;

#[cfg(feature = "esp32")]
pub mod esp;

pub use pins::{PinMap, BAUD_RATE};

/// Drive side of the panel. The command interpreter needs nothing else.
pub trait OutputPort {
    /// Set an output channel's electrical level.
    fn write(&mut self, channel: OutputChannel, level: bool);
}

/// Full panel access for the synchronizer.
pub trait PanelIo: OutputPort {
    /// Raw electrical level of a sensed channel.
    fn read_input(&mut self, channel: InputChannel) -> bool;

    /// Electrical level a driven channel currently sits at.
    fn read_output(&mut self, channel: OutputChannel) -> bool;
}

/// Outbound serial line transmit. Best-effort: delivery is not detected
/// or retried, the heartbeat resynchronizes the far end once the link
/// resumes.
pub trait StatusLink {
    fn send(&mut self, line: &[u8]);
}

/// Hardware watchdog service hook.
pub trait Watchdog {
    fn feed(&mut self);
}
