//! ESP-IDF implementations of the hardware boundary.
//!
//! Raw `esp_idf_svc::sys` calls throughout; everything here was configured
//! once by the shell before the loop starts. Button outputs are set up in
//! input-output mode so [`PanelIo::read_output`] reads the true electrical
//! level back from the pad.

use esp_idf_svc::sys;

use crate::channel::{InputChannel, OutputChannel};
use crate::hal::{OutputPort, PanelIo, PinMap, StatusLink, Watchdog, BAUD_RATE};

/// Serial port used for the status/command link.
pub const LINK_UART: sys::uart_port_t = 1;

/// Driver RX/TX ring sizes handed to `uart_driver_install`.
const UART_BUF_SIZE: i32 = 256;

/// Panel GPIO access through the pin map.
pub struct EspPanel {
    pins: PinMap,
}

impl EspPanel {
    /// Configure every panel pin and return the handle.
    ///
    /// Inputs get pull-ups (LED headers and buttons are active-low),
    /// outputs start released.
    pub fn init(pins: PinMap) -> Self {
        for ch in [
            InputChannel::MbHddLed,
            InputChannel::MbPowerLed,
            InputChannel::CaseResetButton,
            InputChannel::CasePowerButton,
        ] {
            unsafe {
                sys::gpio_reset_pin(pins.input(ch));
                sys::gpio_set_direction(pins.input(ch), sys::gpio_mode_t_GPIO_MODE_INPUT);
                sys::gpio_set_pull_mode(pins.input(ch), sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY);
            }
        }

        for ch in [
            OutputChannel::MbResetButton,
            OutputChannel::MbPowerButton,
            OutputChannel::CaseHddLed,
            OutputChannel::CasePowerLed,
            OutputChannel::StatusIndicator,
        ] {
            unsafe {
                sys::gpio_reset_pin(pins.output(ch));
                // INPUT_OUTPUT keeps the input stage enabled for readback.
                sys::gpio_set_direction(
                    pins.output(ch),
                    sys::gpio_mode_t_GPIO_MODE_INPUT_OUTPUT,
                );
                sys::gpio_set_level(pins.output(ch), 0);
            }
        }

        Self { pins }
    }
}

impl OutputPort for EspPanel {
    fn write(&mut self, channel: OutputChannel, level: bool) {
        unsafe {
            sys::gpio_set_level(self.pins.output(channel), level as u32);
        }
    }
}

impl PanelIo for EspPanel {
    fn read_input(&mut self, channel: InputChannel) -> bool {
        unsafe { sys::gpio_get_level(self.pins.input(channel)) != 0 }
    }

    fn read_output(&mut self, channel: OutputChannel) -> bool {
        unsafe { sys::gpio_get_level(self.pins.output(channel)) != 0 }
    }
}

/// Status/command UART, 115200 8-N-1, no flow control.
pub struct EspLink;

impl EspLink {
    /// Install the UART driver on the link pins.
    pub fn init(pins: &PinMap) -> Self {
        let cfg = sys::uart_config_t {
            baud_rate: BAUD_RATE as i32,
            data_bits: sys::uart_word_length_t_UART_DATA_8_BITS,
            parity: sys::uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: sys::uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: sys::uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            rx_flow_ctrl_thresh: 0,
            ..Default::default()
        };

        unsafe {
            sys::uart_param_config(LINK_UART, &cfg);
            sys::uart_set_pin(LINK_UART, pins.uart_tx, pins.uart_rx, -1, -1);
            sys::uart_driver_install(
                LINK_UART,
                UART_BUF_SIZE,
                UART_BUF_SIZE,
                0,
                core::ptr::null_mut(),
                0,
            );
        }

        Self
    }

    /// Drain whatever the driver has buffered, without waiting.
    ///
    /// Returns the number of bytes placed into `buf`.
    pub fn read_available(&mut self, buf: &mut [u8]) -> usize {
        let n = unsafe {
            sys::uart_read_bytes(
                LINK_UART,
                buf.as_mut_ptr() as *mut core::ffi::c_void,
                buf.len() as u32,
                0,
            )
        };
        if n > 0 {
            n as usize
        } else {
            0
        }
    }
}

impl StatusLink for EspLink {
    fn send(&mut self, line: &[u8]) {
        unsafe {
            sys::uart_write_bytes(
                LINK_UART,
                line.as_ptr() as *const core::ffi::c_void,
                line.len(),
            );
        }
    }
}

/// Task watchdog service hook.
pub struct EspTaskWatchdog;

impl EspTaskWatchdog {
    /// Arm the task watchdog with the given timeout and subscribe the
    /// current task.
    pub fn init(timeout_ms: u32) -> Self {
        let cfg = sys::esp_task_wdt_config_t {
            timeout_ms,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        unsafe {
            // Reconfigure if the bootloader already armed it.
            if sys::esp_task_wdt_init(&cfg) != 0 {
                sys::esp_task_wdt_reconfigure(&cfg);
            }
            sys::esp_task_wdt_add(core::ptr::null_mut());
        }
        Self
    }
}

impl Watchdog for EspTaskWatchdog {
    fn feed(&mut self) {
        unsafe {
            sys::esp_task_wdt_reset();
        }
    }
}

/// True when the last reset was forced by the task watchdog.
pub fn watchdog_caused_reboot() -> bool {
    unsafe { sys::esp_reset_reason() == sys::esp_reset_reason_t_ESP_RST_TASK_WDT }
}

/// Monotonic microsecond clock.
#[inline]
pub fn now_us() -> i64 {
    unsafe { sys::esp_timer_get_time() }
}
