//! Bit-exact JVC frame transmission by tick-counted pulse-length encoding.

use embedded_hal::digital::OutputPin;

use crate::hal::TickWait;
use crate::jvc::{JvcCode, ADDRESS};

/// Number of times a single command is repeated on the wire; some JVC
/// receivers reject single-shot frames.
const FRAME_REPEATS: u8 = 3;

/// Drives one output pin with tick-counted pulse-length encoding.
///
/// Owns the pin and the tick source exclusively for the duration of a
/// [`send`](Transmitter::send): the output pin belongs to the main-loop
/// transmitter alone, and the tick loop is held until the frame completes.
pub struct Transmitter<P, W> {
    pin: P,
    ticks: W,
}

impl<P, W> Transmitter<P, W>
where
    P: OutputPin,
    W: TickWait,
{
    pub fn new(pin: P, ticks: W) -> Self {
        Self { pin, ticks }
    }

    /// Release the pin and tick source, e.g. to hand the tick source back
    /// to the dispatcher's cooldown wait.
    pub fn into_parts(self) -> (P, W) {
        (self.pin, self.ticks)
    }

    pub fn ticks_mut(&mut self) -> &mut W {
        &mut self.ticks
    }

    /// Emit `code` as three repeated frames.
    pub fn send(&mut self, code: JvcCode) -> Result<(), P::Error> {
        for _ in 0..FRAME_REPEATS {
            self.frame(code.value())?;
        }
        Ok(())
    }

    fn frame(&mut self, command: u8) -> Result<(), P::Error> {
        // Bus reset.
        self.pin.set_high()?;
        self.ticks.wait_ticks(1);

        // AGC.
        self.pin.set_low()?;
        self.ticks.wait_ticks(16);
        self.pin.set_high()?;
        self.ticks.wait_ticks(8);

        self.ple_bit(true)?; // start bit
        self.ple_byte7(ADDRESS)?;
        self.ple_byte7(command)?;
        self.ple_bit(true)?; // stop bits
        self.ple_bit(true)?;

        Ok(())
    }

    /// Seven PLE bits, LSB first.
    fn ple_byte7(&mut self, value: u8) -> Result<(), P::Error> {
        for i in 0..7 {
            self.ple_bit(value & (1 << i) != 0)?;
        }
        Ok(())
    }

    /// One pulse-length-encoded bit: low for 1 tick, then high for 1 tick
    /// (zero) or 3 ticks (one).
    fn ple_bit(&mut self, value: bool) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.ticks.wait_ticks(1);
        self.pin.set_high()?;
        self.ticks.wait_ticks(1);
        if value {
            self.ticks.wait_ticks(2);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use embedded_hal::digital::{Error, ErrorType};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        High,
        Low,
        Wait(u32),
    }

    #[derive(Debug)]
    struct NeverErrors;
    impl Error for NeverErrors {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    struct PinHandle(Rc<RefCell<Vec<Event>>>);
    struct TickHandle(Rc<RefCell<Vec<Event>>>);

    impl ErrorType for PinHandle {
        type Error = NeverErrors;
    }

    impl OutputPin for PinHandle {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::High);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Low);
            Ok(())
        }
    }

    impl TickWait for TickHandle {
        fn wait_ticks(&mut self, n: u32) {
            self.0.borrow_mut().push(Event::Wait(n));
        }
    }

    fn harness() -> (Transmitter<PinHandle, TickHandle>, Rc<RefCell<Vec<Event>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tx = Transmitter::new(PinHandle(log.clone()), TickHandle(log.clone()));
        (tx, log)
    }

    fn expected_bit(value: bool) -> Vec<Event> {
        let mut v = vec![Event::Low, Event::Wait(1), Event::High, Event::Wait(1)];
        if value {
            v.push(Event::Wait(2));
        }
        v
    }

    fn expected_byte7(value: u8) -> Vec<Event> {
        let mut v = Vec::new();
        for i in 0..7 {
            v.extend(expected_bit(value & (1 << i) != 0));
        }
        v
    }

    fn expected_frame(command: u8) -> Vec<Event> {
        let mut v: Vec<Event> = vec![
            Event::High,
            Event::Wait(1),
            Event::Low,
            Event::Wait(16),
            Event::High,
            Event::Wait(8),
        ];
        v.extend(expected_bit(true));
        v.extend(expected_byte7(ADDRESS));
        v.extend(expected_byte7(command));
        v.extend(expected_bit(true));
        v.extend(expected_bit(true));
        v
    }

    #[test]
    fn send_repeats_the_frame_exactly_three_times() {
        let (mut tx, log) = harness();
        tx.send(JvcCode::VolUp).unwrap();

        let mut expected = Vec::new();
        for _ in 0..3 {
            expected.extend(expected_frame(JvcCode::VolUp.value()));
        }
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn frame_carries_the_fixed_address_and_requested_command() {
        let (mut tx, log) = harness();
        tx.send(JvcCode::Source).unwrap();

        let log = log.borrow();
        // Each frame is identical in length; slice out the first and check
        // it matches address=0x47, command=Source exactly.
        let one_frame_len = expected_frame(JvcCode::Source.value()).len();
        assert_eq!(log.len(), one_frame_len * 3);
        assert_eq!(&log[..one_frame_len], &expected_frame(0x08)[..]);
    }

    #[test]
    fn every_frame_begins_with_bus_reset_and_ends_with_two_stop_bits() {
        let (mut tx, log) = harness();
        tx.send(JvcCode::Mute).unwrap();
        let log = log.borrow();
        let one_frame_len = expected_frame(JvcCode::Mute.value()).len();

        for frame in log.chunks(one_frame_len) {
            assert_eq!(&frame[..2], &[Event::High, Event::Wait(1)]);
            let stop = &frame[frame.len() - 4..];
            assert_eq!(stop, &[Event::Low, Event::Wait(1), Event::High, Event::Wait(3)]);
        }
    }

    #[test]
    fn ple_one_high_phase_is_three_times_ple_zero_high_phase() {
        // The low phase is identical for both bit values (1 tick, 1 tick);
        // the one-bit's high phase (1+2=3 ticks) is 3x the zero-bit's (1 tick).
        let zero = expected_bit(false);
        let one = expected_bit(true);
        assert_eq!(zero[0], Event::Low);
        assert_eq!(one[0], Event::Low);
        assert_eq!(zero[1], one[1]); // identical low-phase wait
        let zero_high_ticks = 1;
        let one_high_ticks = 1 + 2;
        assert_eq!(one_high_ticks, zero_high_ticks * 3);
    }
}
