//! The single-channel ADC reading the steering-wheel resistor ladder.

use attiny_hal::adc::{Adc, AdcSettings, Channel};
use attiny_hal::pac::ADC;
use attiny_hal::port::mode::Input;
use attiny_hal::port::{Pin, PB4};
use bridge_core::hal::AdcSample;

/// Wraps the HAL's ADC driver and the one channel the harness is wired to
/// (PB4 / ADC2), prescaled to 125kHz per the datasheet's recommended range
/// for an 8MHz system clock.
pub struct LadderAdc {
    adc: Adc,
    channel: Channel,
}

impl LadderAdc {
    pub fn new(peripheral: ADC, pin: Pin<Input, PB4>) -> Self {
        let mut adc = Adc::new(peripheral, AdcSettings::default());
        let channel = pin.into_analog_input(&mut adc).into_channel();
        Self { adc, channel }
    }
}

impl AdcSample for LadderAdc {
    fn sample(&mut self) -> u16 {
        nb::block!(self.adc.read(&mut self.channel)).unwrap_or(0)
    }
}
