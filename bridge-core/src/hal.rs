//! The narrow interfaces the core consumes from its external collaborators:
//! a tick source and an ADC. The output line is represented directly by
//! [`embedded_hal::digital::OutputPin`], so it is not re-wrapped here.

/// A source of the ~527 µs system tick.
///
/// Implementations busy-wait, consuming ticks from whatever flag the tick
/// ISR sets; this is a "consume N ticks" abstraction, not "sleep N
/// milliseconds".
pub trait TickWait {
    /// Block until `n` further ticks have elapsed.
    fn wait_ticks(&mut self, n: u32);
}

/// A single-channel ADC returning a 10-bit unsigned sample.
pub trait AdcSample {
    /// Perform one conversion and return the 10-bit result (0..=1023).
    fn sample(&mut self) -> u16;
}
