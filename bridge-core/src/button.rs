//! The seven logical states the steering-wheel harness can present.

/// One physical button (or the absence of any), as resolved by the
/// [`classifier`](crate::classifier).
///
/// Exactly one variant is "current" at any instant; there is no notion of
/// chording two buttons at once, because the harness is a single resistor
/// ladder sampled through a single ADC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicalButton {
    /// No button pressed (or an ADC sample outside every known window).
    #[default]
    Idle,
    VolumeUp,
    VolumeDown,
    /// The steering-wheel stalk's "source" position.
    Source,
    SeekForward,
    SeekBackward,
    /// Mute or Sound depending on [`Config::aux`](crate::config::Config::aux).
    Aux,
}
