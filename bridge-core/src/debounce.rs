//! Tick-driven debouncing of a [`LogicalButton`] stream.

use crate::button::LogicalButton;

/// Debounces a stream of classified button readings.
///
/// `sample` is called once per tick from two contexts: the tick ISR (with
/// the previous tick's classification) and, under a critical section, the
/// main-loop dispatcher. Both call sites share one `Debouncer` instance;
/// see `glue` in the firmware crate for how the critical section is taken.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    required_stable_ticks: u8,
    idle_value: LogicalButton,
    current_stable: LogicalButton,
    candidate: LogicalButton,
    candidate_age_ticks: u8,
    /// Honored by the dispatcher, not here: this firmware always constructs
    /// with `one_shot = false`, so the field only documents the policy, it
    /// never changes `sample`'s behavior.
    one_shot: bool,
}

impl Debouncer {
    /// `required_stable_ticks` is the dwell time in ticks (typically 5-10);
    /// `idle_value` seeds `current_stable` at boot.
    pub const fn new(required_stable_ticks: u8, idle_value: LogicalButton) -> Self {
        Self {
            required_stable_ticks,
            idle_value,
            current_stable: idle_value,
            candidate: idle_value,
            candidate_age_ticks: 0,
            one_shot: false,
        }
    }

    pub const fn is_one_shot(&self) -> bool {
        self.one_shot
    }

    /// The currently debounced, stable value.
    pub const fn current(&self) -> LogicalButton {
        self.current_stable
    }

    /// Feed one tick's classification and return the (possibly unchanged)
    /// stable value.
    pub fn sample(&mut self, input: LogicalButton) -> LogicalButton {
        if input == self.current_stable {
            self.candidate = self.current_stable;
            self.candidate_age_ticks = 0;
        } else if input == self.candidate {
            self.candidate_age_ticks = self.candidate_age_ticks.saturating_add(1);
            if self.candidate_age_ticks >= self.required_stable_ticks {
                self.current_stable = self.candidate;
                self.candidate_age_ticks = 0;
            }
        } else {
            self.candidate = input;
            self.candidate_age_ticks = 1;
        }
        self.current_stable
    }
}
