//! Inbound byte path.
//!
//! Accumulates received bytes and, on line completion, synchronously
//! decodes and applies the command before returning. Single producer: the
//! shell feeds bytes from exactly one context (the cooperative loop on the
//! reference port), so a line is always dispatched whole and in order.

use crate::hal::OutputPort;
use crate::interpreter;
use crate::logging::LogRing;
use crate::protocol::{self, LineBuffer, RemoteCommand, MAX_LINE_LEN};
use crate::stats::BridgeStats;
use crate::{log_info, log_warn};

/// What a completed line turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Recognized and applied to an output.
    Applied(RemoteCommand),
    /// Matched nothing in the vocabulary; logged and discarded.
    Unrecognized,
}

/// Inbound line accumulator and dispatcher.
pub struct CommandReceiver<'a> {
    line: LineBuffer,
    power_indicator: bool,
    stats: &'a BridgeStats,
    log: &'a LogRing,
}

impl<'a> CommandReceiver<'a> {
    pub const fn new(power_indicator: bool, stats: &'a BridgeStats, log: &'a LogRing) -> Self {
        Self {
            line: LineBuffer::new(),
            power_indicator,
            stats,
            log,
        }
    }

    /// Feed one received byte.
    ///
    /// Returns `None` while a line is still accumulating. A completed line
    /// (terminator seen, or truncated at the capacity bound) is decoded and
    /// dispatched before this returns; the buffer is cleared either way.
    pub fn on_byte(
        &mut self,
        byte: u8,
        now_us: i64,
        port: &mut dyn OutputPort,
    ) -> Option<LineOutcome> {
        if !self.line.push(byte) {
            return None;
        }

        if byte != b'\n' && self.line.len() >= MAX_LINE_LEN - 1 {
            self.stats.note_overflow();
            log_warn!(
                self.log,
                now_us,
                "rx overflow, dispatching {} bytes truncated",
                self.line.len()
            );
        }

        let outcome = match protocol::decode(self.line.as_bytes()) {
            Some(cmd) => {
                interpreter::apply(cmd, port, self.power_indicator);
                self.stats.note_command();
                log_info!(self.log, now_us, "rx {:?} {:?}", cmd.target, cmd.action);
                LineOutcome::Applied(cmd)
            }
            None => {
                self.stats.note_unknown();
                log_warn!(
                    self.log,
                    now_us,
                    "rx ignored line ({} bytes)",
                    self.line.len()
                );
                LineOutcome::Unrecognized
            }
        };

        self.stats.note_line();
        self.line.clear();
        Some(outcome)
    }

    /// Bytes accumulated toward the next line.
    pub fn pending_len(&self) -> usize {
        self.line.len()
    }
}
