//! Serial line protocol
//!
//! Line-oriented text over a point-to-point 115200 8-N-1 link.
//! Outbound: fixed-format status lines. Inbound: a closed command
//! vocabulary matched byte-for-byte, terminator included.

pub mod command;
pub mod line_buffer;
pub mod status;

pub use command::{decode, Action, ButtonOutput, RemoteCommand};
pub use line_buffer::{LineBuffer, MAX_LINE_LEN};
pub use status::{encode, STATUS_LINE_LEN};
