use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, AdcPin, Attenuation},
    peripherals::ADC1,
};
use ledpanel_core::{Thermometer, temperature::celsius_from_raw};

use crate::config::TemperaturePin;

/// Temperature sensor on an ADC1 input, one-shot 12-bit samples.
pub struct AdcThermometer {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: AdcPin<TemperaturePin, ADC1<'static>>,
}

impl AdcThermometer {
    pub fn new(adc: ADC1<'static>, pin: TemperaturePin) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(pin, Attenuation::_11dB);
        let adc = Adc::new(adc, config);
        Self { adc, pin }
    }
}

impl Thermometer for AdcThermometer {
    fn read_celsius(&mut self) -> f32 {
        let raw = match nb::block!(self.adc.read_oneshot(&mut self.pin)) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("adc: sample failed: {:?}", e);
                0
            }
        };
        celsius_from_raw(raw)
    }
}
