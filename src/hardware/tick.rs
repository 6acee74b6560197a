//! Timer1 configured in CTC mode to fire a ~527us tick.
//!
//! ATtiny85's Timer1 is an 8-bit timer with its own CTC register (`OCR1C`,
//! distinct from the ATmega-style `WGM` bits other AVRs use for CTC mode).
//! `attiny-hal` doesn't wrap this timer at a granularity useful for an
//! arbitrary sub-millisecond period, so this talks to the peripheral
//! registers directly, the same way the reference firmware's timer setup
//! does.

use attiny_hal::pac::TC1;

const F_CPU: u32 = 8_000_000;
/// CS13 alone selects a /128 prescaler for Timer1 on the ATtiny85.
const PRESCALE: u32 = 128;
/// Target period in microseconds, minus the measured ISR entry/exit
/// overhead the reference firmware calibrated out.
const PERIOD_US: u32 = 527 - 67;

/// `(F_CPU / 4 / (PRESCALE * PERIOD_US)) - 1`, the compare value that makes
/// Timer1 wrap at the target period.
const COMPARE: u8 = ((F_CPU / 4 / (PRESCALE * PERIOD_US)) - 1) as u8;

/// Configure Timer1 for CTC mode at `COMPARE` and enable its compare-match
/// interrupt. Does not enable global interrupts; the caller does that once
/// the rest of bring-up is finished.
pub fn start(tc1: TC1) {
    tc1.ocr1c.write(|w| w.bits(COMPARE));
    tc1.ocr1a.write(|w| w.bits(COMPARE));
    // CS13 alone (0b1000) selects the /128 prescaler.
    tc1.tccr1.write(|w| w.ctc1().set_bit().cs1().bits(0b1000));
    tc1.timsk.write(|w| w.ocie1a().set_bit());
}
