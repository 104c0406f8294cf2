mod buzzer;
mod leds;
mod network;
mod thermometer;

pub use buzzer::LedcBuzzer;
pub use leds::{EspLeds, LedChannel, init_ledc, init_leds};
pub use network::{NetworkHandles, init_network_stack, join, wait_for_connection};
pub use thermometer::AdcThermometer;

/// Start-up failures. The underlying driver error is logged where it
/// happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    Pwm,
    Radio,
    Wifi,
    JoinTimeout,
    DhcpTimeout,
}
