//! # atx-bridge
//!
//! Firmware core for a bidirectional bridge between ATX front-panel
//! signals (power/reset buttons, power/activity LEDs) and a managing host
//! on a serial link.
//!
//! ## Architecture
//!
//! - [`BridgeEngine`] runs the cooperative tick: sample, pass-through,
//!   report on change or heartbeat, watchdog service
//! - [`CommandReceiver`] turns inbound bytes into button presses
//! - Hardware sits behind the [`hal`] traits; this library is pure logic
//!   and tests entirely on the host
//!
//! The shell (`src/main.rs`, `esp32` feature) owns bring-up and the loop
//! itself.

#![cfg_attr(not(test), no_std)]

pub mod channel;
pub mod config;
pub mod debounce;
pub mod hal;
pub mod interpreter;
pub mod logging;
pub mod protocol;
pub mod rx;
pub mod stats;
pub mod sync;

pub use channel::{InputChannel, OutputChannel, PanelSnapshot, Polarity, Role};
pub use config::BridgeConfig;
pub use debounce::Debouncer;
pub use logging::{LogLevel, LogRing};
pub use protocol::{Action, ButtonOutput, RemoteCommand};
pub use rx::{CommandReceiver, LineOutcome};
pub use stats::BridgeStats;
pub use sync::BridgeEngine;
