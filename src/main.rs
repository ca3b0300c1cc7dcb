//! bridge - firmware entry point
//!
//! One-time bring-up (GPIO, UART, task watchdog), the boot indicator
//! pulse, then the cooperative main loop: drain received bytes into the
//! command receiver, run one engine tick, drain the log ring. Nothing in
//! the loop blocks; the watchdog covers a hung loop with a hardware
//! reset.

#![no_std]
#![no_main]

use esp_idf_svc::sys;

use atx_bridge::hal::esp::{
    now_us, watchdog_caused_reboot, EspLink, EspPanel, EspTaskWatchdog,
};
use atx_bridge::hal::PinMap;
use atx_bridge::channel::OutputChannel;
use atx_bridge::config::{BridgeConfig, WATCHDOG_TIMEOUT_MS};
use atx_bridge::hal::OutputPort;
use atx_bridge::logging::format_entry;
use atx_bridge::{log_info, log_warn};
use atx_bridge::{BridgeEngine, BridgeStats, CommandReceiver, LogRing};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Console UART for log output (the standard boot console).
const CONSOLE_UART: sys::uart_port_t = 0;

/// How long the indicator stays lit at startup.
const BOOT_PULSE_MS: u32 = 5_000;

static LOG: LogRing = LogRing::new();
static STATS: BridgeStats = BridgeStats::new();

/// FreeRTOS delay. Default tick rate is 100 Hz, so millisecond
/// resolution bottoms out at 10 ms.
fn delay_ms(ms: u32) {
    unsafe {
        sys::vTaskDelay((ms / 10).max(1));
    }
}

/// Write one drained log entry to the boot console.
fn console_write(entry: &atx_bridge::logging::LogEntry) {
    let mut buf = [0u8; 160];
    let len = format_entry(entry, &mut buf);
    unsafe {
        sys::uart_write_bytes(
            CONSOLE_UART,
            buf.as_ptr() as *const core::ffi::c_void,
            len,
        );
    }
}

#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    sys::link_patches();

    let cfg = BridgeConfig::with_chassis();
    let pins = PinMap::reference();

    let mut panel = EspPanel::init(pins);
    let mut link = EspLink::init(&pins);
    let mut watchdog = EspTaskWatchdog::init(WATCHDOG_TIMEOUT_MS);

    log_info!(LOG, now_us(), "{} up", VERSION);
    if watchdog_caused_reboot() {
        log_warn!(LOG, now_us(), "rebooted by watchdog");
    }

    // Boot pulse: indicator on for a fixed period, then released.
    panel.write(OutputChannel::StatusIndicator, true);
    delay_ms(BOOT_PULSE_MS);
    panel.write(OutputChannel::StatusIndicator, false);

    let mut engine = BridgeEngine::new(cfg, &STATS, &LOG);
    let mut receiver = CommandReceiver::new(cfg.power_indicator, &STATS, &LOG);
    let mut rx_buf = [0u8; 64];

    loop {
        let now = now_us();

        // Inbound bytes: dispatch completed lines before sampling, so a
        // commanded press is visible to this tick's report.
        let n = link.read_available(&mut rx_buf);
        for &byte in &rx_buf[..n] {
            receiver.on_byte(byte, now, &mut panel);
        }

        engine.tick(now, &mut panel, &mut link, &mut watchdog);

        while let Some(entry) = LOG.drain() {
            console_write(&entry);
        }

        delay_ms((cfg.tick_period_us / 1_000) as u32);
    }
}
