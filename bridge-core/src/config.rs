//! Compile-time configuration record grouping everything that differs
//! between hardware variants: the classifier table, the Aux code mapping,
//! the debounce window, and the held-seek policy. Variants are two named
//! `const` configurations rather than conditional compilation.

use crate::button::LogicalButton;
use crate::classifier::{ClassifierEntry, ClassifierTable};
use crate::jvc::JvcCode;

/// Which code the seventh logical button ([`LogicalButton::Aux`]) sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxCode {
    Mute,
    Sound,
}

impl AuxCode {
    pub const fn jvc_code(self) -> JvcCode {
        match self {
            AuxCode::Mute => JvcCode::Mute,
            AuxCode::Sound => JvcCode::Sound,
        }
    }
}

/// What a held (not just pressed) seek button sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldSeekPolicy {
    /// Both directions emit the dedicated "held" code (0x13 / 0x14) while
    /// held.
    BothHeldCodes,
    /// Forward-seek re-emits the short code (0x12) while held; only
    /// backward-seek switches to the held code (0x13). Matches the
    /// KD-X351BT behavior noted in the original firmware.
    ForwardRepeatsShort,
}

/// Number of ticks the dispatcher idles after sending a volume code, so the
/// auto-repeat rate is ~5 Hz rather than the full tick rate.
pub const VOLUME_COOLDOWN_TICKS: u32 = 400;

/// One hardware variant's worth of compile-time configuration: the
/// classifier table, the Aux code mapping, the debounce window, and the
/// held-seek policy.
pub struct Config<const N: usize> {
    pub classifier: ClassifierTable<N>,
    pub aux: AuxCode,
    pub debounce_ticks: u8,
    pub held_seek: HeldSeekPolicy,
}

impl<const N: usize> Config<N> {
    /// Build a `Config`, asserting the classifier table's windows are
    /// pairwise disjoint so every ADC reading maps to at most one button.
    ///
    /// This is deliberately not a `Result`-returning fallible constructor:
    /// every `Config` this firmware ships is a `const`, so the assertion
    /// below is evaluated by the compiler and a misconfigured table is a
    /// build failure, never a runtime one.
    pub const fn new(
        classifier: ClassifierTable<N>,
        aux: AuxCode,
        debounce_ticks: u8,
        held_seek: HeldSeekPolicy,
    ) -> Self {
        assert!(
            classifier.windows_are_disjoint(),
            "classifier windows overlap: ambiguous button mapping"
        );
        Self {
            classifier,
            aux,
            debounce_ticks,
            held_seek,
        }
    }
}

/// Tight-window variant mapping [`LogicalButton::Aux`] to Mute, with held
/// seek always sending the dedicated held code in both directions.
pub const VARIANT_A: Config<6> = Config::new(
    ClassifierTable::new([
        ClassifierEntry::new(LogicalButton::VolumeUp, 266, 15),
        ClassifierEntry::new(LogicalButton::VolumeDown, 157, 15),
        ClassifierEntry::new(LogicalButton::Source, 777, 15),
        ClassifierEntry::new(LogicalButton::SeekForward, 513, 15),
        ClassifierEntry::new(LogicalButton::SeekBackward, 645, 15),
        ClassifierEntry::new(LogicalButton::Aux, 388, 15),
    ]),
    AuxCode::Mute,
    10,
    HeldSeekPolicy::BothHeldCodes,
);

/// Relaxed-window variant mapping [`LogicalButton::Aux`] to Sound, with a
/// wider VolumeDown window and the KD-X351BT held-seek behavior (forward
/// re-emits the short code; only backward switches to the held code).
pub const VARIANT_B: Config<6> = Config::new(
    ClassifierTable::new([
        ClassifierEntry::new(LogicalButton::VolumeUp, 269, 30),
        ClassifierEntry::new(LogicalButton::VolumeDown, 157, 30),
        ClassifierEntry::new(LogicalButton::Source, 780, 30),
        ClassifierEntry::new(LogicalButton::SeekForward, 516, 30),
        ClassifierEntry::new(LogicalButton::SeekBackward, 648, 30),
        ClassifierEntry::new(LogicalButton::Aux, 391, 30),
    ]),
    AuxCode::Sound,
    5,
    HeldSeekPolicy::ForwardRepeatsShort,
);
