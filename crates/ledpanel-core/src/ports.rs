//! Hardware ports
//!
//! Implemented by the board crate; the [`Panel`](crate::Panel) is generic
//! over them. The status LED uses `embedded_hal::digital::OutputPin` and
//! pauses use `embedded_hal_async::delay::DelayNs` directly.

use crate::state::Levels;

/// Duty-cycle output for the three LED channels.
pub trait LevelOutput {
    /// Program all three duty cycles. Writing unchanged levels has no
    /// visible effect.
    fn apply(&mut self, levels: Levels);
}

/// One-shot temperature reading.
pub trait Thermometer {
    /// Sample the sensor, in degrees Celsius.
    fn read_celsius(&mut self) -> f32;
}

/// Tone output for the alarm and the melody.
#[allow(async_fn_in_trait)]
pub trait Buzzer {
    /// Sound `frequency_hz` for `duration_ms`, then fall silent.
    async fn tone(&mut self, frequency_hz: u32, duration_ms: u32);
}
