//! Board bring-up: pin directions, the Timer1 tick source and the ADC
//! channel the steering-wheel harness is wired to.
//!
//! PORTB0 drives the JVC remote line; PORTB4 (ADC2) reads the resistor
//! ladder. Both are fixed by the wiring harness, not configurable per
//! variant.

pub mod adc;
pub mod tick;

use attiny_hal::pac::Peripherals;
use attiny_hal::port::mode::Output;
use attiny_hal::port::PB0;
use attiny_hal::Pins;

pub use adc::LadderAdc;

/// The two board-specific handles the firmware binaries hand to
/// `bridge-core`: the JVC output line and the ladder ADC. The tick source
/// ([`glue::Ticker`](crate::glue::Ticker)) is zero-sized and not part of
/// this struct.
pub struct Bridge {
    pub jvc_line: attiny_hal::port::Pin<Output, PB0>,
    pub adc: LadderAdc,
}

/// Bring up the clock-independent peripherals and enable the Timer1 tick
/// interrupt. Must run before `sei()`/interrupts are enabled.
pub fn setup() -> Bridge {
    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB);

    let jvc_line = pins.pb0.into_output();

    let adc = LadderAdc::new(dp.ADC, pins.pb4);

    tick::start(dp.TC1);

    Bridge { jvc_line, adc }
}
