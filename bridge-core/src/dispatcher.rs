//! Top-level press/hold state machine: sample → classify → debounce has
//! already happened by the time [`Dispatcher::dispatch`] runs; this module
//! only decides which JVC code, if any, to send for the resulting stable
//! [`LogicalButton`].

use embedded_hal::digital::OutputPin;

use crate::button::LogicalButton;
use crate::config::{Config, HeldSeekPolicy, VOLUME_COOLDOWN_TICKS};
use crate::hal::TickWait;
use crate::jvc::JvcCode;
use crate::transmitter::Transmitter;

/// Tracks the previously-dispatched stable value to distinguish a first
/// press from a continued hold.
#[derive(Debug, Default)]
pub struct Dispatcher {
    last_stable: LogicalButton,
}

impl Dispatcher {
    pub const fn new() -> Self {
        Self {
            last_stable: LogicalButton::Idle,
        }
    }

    /// Decide and send zero or one JVC command through `transmitter` for
    /// `current`, then update edge-detection state.
    pub fn dispatch<P, W, const N: usize>(
        &mut self,
        current: LogicalButton,
        config: &Config<N>,
        transmitter: &mut Transmitter<P, W>,
    ) -> Result<(), P::Error>
    where
        P: OutputPin,
        W: TickWait,
    {
        let first_observation = current != self.last_stable;

        match current {
            LogicalButton::Idle => {}

            // Auto-repeat with pacing: resend every tick the button stays
            // stable, but cool down for VOLUME_COOLDOWN_TICKS afterwards so
            // the effective repeat rate is ~5 Hz.
            LogicalButton::VolumeUp => {
                transmitter.send(JvcCode::VolUp)?;
                transmitter.ticks_mut().wait_ticks(VOLUME_COOLDOWN_TICKS);
            }
            LogicalButton::VolumeDown => {
                transmitter.send(JvcCode::VolDn)?;
                transmitter.ticks_mut().wait_ticks(VOLUME_COOLDOWN_TICKS);
            }

            // Edge-only codes: exactly one emission per press-release cycle.
            LogicalButton::Source => {
                if first_observation {
                    transmitter.send(JvcCode::Source)?;
                }
            }
            LogicalButton::Aux => {
                if first_observation {
                    transmitter.send(config.aux.jvc_code())?;
                }
            }

            // Press-vs-held distinct codes.
            LogicalButton::SeekForward => {
                let code = if first_observation {
                    JvcCode::SkipForward
                } else {
                    match config.held_seek {
                        HeldSeekPolicy::BothHeldCodes => JvcCode::SkipForwardHeld,
                        HeldSeekPolicy::ForwardRepeatsShort => JvcCode::SkipForward,
                    }
                };
                transmitter.send(code)?;
            }
            LogicalButton::SeekBackward => {
                let code = if first_observation {
                    JvcCode::SkipBack
                } else {
                    JvcCode::SkipBackHeld
                };
                transmitter.send(code)?;
            }
        }

        self.last_stable = current;
        Ok(())
    }
}
