//! Entry point for the variant that maps the seventh steering-wheel
//! position to JVC Sound: the relaxed-window classifier table with the
//! KD-X351BT forward-seek-repeats-short held policy.
#![no_std]
#![no_main]

use panic_halt as _;

use astra_jvc_bridge::glue::{self, Ticker};
use astra_jvc_bridge::hardware;
use bridge_core::config::VARIANT_B as CONFIG;
use bridge_core::hal::AdcSample;
use bridge_core::{Dispatcher, Transmitter};

#[avr_device::entry]
fn main() -> ! {
    let bridge = hardware::setup();
    glue::init(CONFIG.debounce_ticks);

    // Safety: all peripherals are configured and `glue::init` has run;
    // nothing observes an interrupt before this point.
    unsafe { avr_device::interrupt::enable() };

    let mut transmitter = Transmitter::new(bridge.jvc_line, Ticker::default());
    let mut dispatcher = Dispatcher::new();
    let mut adc = bridge.adc;
    let mut sampler = Ticker::default();

    loop {
        sampler.wait_for_tick();
        let sample = adc.sample();
        let decoded = CONFIG.classifier.classify(sample);
        let current = glue::sample_debounced(decoded);
        dispatcher.dispatch(current, &CONFIG, &mut transmitter).ok();
    }
}

#[avr_device::interrupt(attiny85)]
fn TIMER1_COMPA() {
    astra_jvc_bridge::glue::on_tick();
}
