/// ADC reference voltage.
pub const ADC_REFERENCE_VOLTS: f32 = 3.3;
/// ADC resolution in bits.
pub const ADC_BITS: u32 = 12;

/// Voltage at 27 °C.
const VOLTS_AT_27C: f32 = 0.706;
/// Sensor slope, volts per °C.
const VOLTS_PER_DEGREE: f32 = 0.001_721;

/// Convert a raw 12-bit sample of the temperature channel to °C.
#[allow(clippy::cast_precision_loss)]
pub fn celsius_from_raw(raw: u16) -> f32 {
    let volts = f32::from(raw) * (ADC_REFERENCE_VOLTS / (1u32 << ADC_BITS) as f32);
    27.0 - (volts - VOLTS_AT_27C) / VOLTS_PER_DEGREE
}
