#![no_std]

//! ESP32 board support for the LED control panel.
//!
//! Wires the `ledpanel-core` ports to LEDC PWM channels, ADC1, a GPIO
//! buzzer and the status LED, joins Wi-Fi and serves the panel over
//! `embassy-net`.

pub mod config;
pub mod drivers;
mod server;
pub mod tasks;

use core::fmt::Debug;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use esp_hal::gpio::Output;
use ledpanel_core::Panel;

use crate::drivers::{AdcThermometer, EspLeds, LedcBuzzer};

/// The panel with this board's drivers.
pub type EspPanel = Panel<EspLeds, AdcThermometer, LedcBuzzer, Output<'static>, embassy_time::Delay>;

/// The single lock every task goes through to reach the panel.
pub type SharedPanel = Mutex<CriticalSectionRawMutex, EspPanel>;

#[macro_export]
// Create a static cell for a given type and value
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}

/// Log an unrecoverable start-up failure and stop.
pub fn halt(stage: &str, error: impl Debug) -> ! {
    log::error!("{}: {:?}, halting", stage, error);
    loop {
        core::hint::spin_loop();
    }
}
