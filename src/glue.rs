//! Critical-section-protected state shared between the Timer1 tick
//! interrupt and the main loop.
//!
//! The tick ISR fires every ~527us and advances the debouncer using
//! whatever button the *previous* main-loop iteration classified, so
//! debounce timing stays accurate even while the main loop is blocked
//! mid-transmission. The main loop advances the *same* debouncer again,
//! immediately, with its own fresh classification, under a critical
//! section — mirroring the original firmware's `main()`, which calls
//! `getDebounced()` itself right after writing `decodedValue`, in addition
//! to the ISR's own call. One classification is therefore debounced twice
//! (once inline, once on the next tick); this is the original's behavior,
//! not a bug introduced here, and every debounce test tolerates it.

use core::cell::RefCell;

use bridge_core::debounce::Debouncer;
use bridge_core::hal::TickWait;
use bridge_core::LogicalButton;
use critical_section::Mutex;

struct SharedState {
    /// Set by the ISR on every tick, cleared by whichever `wait_ticks` call
    /// is waiting for it.
    tick: bool,
    /// The most recent classification, written by the main loop.
    decoded: LogicalButton,
    /// The debounced value, advanced by the ISR from `decoded`.
    stable: LogicalButton,
    debouncer: Debouncer,
}

static SHARED: Mutex<RefCell<Option<SharedState>>> = Mutex::new(RefCell::new(None));

/// Must be called once, before interrupts are enabled, with the debounce
/// window (in ticks) for the hardware variant this binary builds for.
pub fn init(debounce_ticks: u8) {
    critical_section::with(|cs| {
        *SHARED.borrow(cs).borrow_mut() = Some(SharedState {
            tick: false,
            decoded: LogicalButton::Idle,
            stable: LogicalButton::Idle,
            debouncer: Debouncer::new(debounce_ticks, LogicalButton::Idle),
        });
    });
}

/// Called from `#[avr_device::interrupt(attiny85)]` on the Timer1 compare
/// match. Kept tiny and free of anything that can block.
pub fn on_tick() {
    critical_section::with(|cs| {
        let mut shared = SHARED.borrow(cs).borrow_mut();
        if let Some(state) = shared.as_mut() {
            state.tick = true;
            let decoded = state.decoded;
            state.stable = state.debouncer.sample(decoded);
        }
    });
}

/// Record the main loop's latest classification as `decoded` (so the ISR
/// debounces it on the following tick), then debounce it again right here,
/// under a critical section, and return the resulting stable value.
pub fn sample_debounced(value: LogicalButton) -> LogicalButton {
    critical_section::with(|cs| {
        let mut shared = SHARED.borrow(cs).borrow_mut();
        match shared.as_mut() {
            Some(state) => {
                state.decoded = value;
                state.stable = state.debouncer.sample(value);
                state.stable
            }
            None => LogicalButton::Idle,
        }
    })
}

/// The [`TickWait`] bridge-core blocks on, both for its own pacing (the
/// volume cooldown) and inside `Transmitter::send`.
#[derive(Default)]
pub struct Ticker;

impl Ticker {
    /// Block until the next tick, without assuming anything has already
    /// been consumed. Used by the main loop's own sampling cadence.
    pub fn wait_for_tick(&mut self) {
        loop {
            let fired = critical_section::with(|cs| {
                let mut shared = SHARED.borrow(cs).borrow_mut();
                match shared.as_mut() {
                    Some(state) if state.tick => {
                        state.tick = false;
                        true
                    }
                    _ => false,
                }
            });
            if fired {
                return;
            }
        }
    }
}

impl TickWait for Ticker {
    fn wait_ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.wait_for_tick();
        }
    }
}
