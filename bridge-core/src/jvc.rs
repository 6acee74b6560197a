//! JVC wired-remote command codes and the fixed device address.

/// The device address transmitted with every frame.
///
/// JVC car radios of this era share one 7-bit address space regardless of
/// model; `0x47` is the value this harness's target radios respond to.
pub const ADDRESS: u8 = 0x47;

/// A 7-bit JVC remote command code.
///
/// The high bit is always clear: every code here fits in 7 bits (the eighth
/// bit of the wire byte is unused).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum JvcCode {
    VolUp = 0x04,
    VolDn = 0x05,
    Mute = 0x06,
    Sound = 0x0D,
    Source = 0x08,
    SkipBack = 0x11,
    SkipForward = 0x12,
    SkipBackHeld = 0x13,
    SkipForwardHeld = 0x14,
}

impl JvcCode {
    /// The raw 7-bit value transmitted on the wire.
    pub const fn value(self) -> u8 {
        self as u8
    }
}
