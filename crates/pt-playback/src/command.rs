//! Playback commands from the input collaborator.

use crate::error::{PlaybackError, PlaybackResult};
use pt_core::Real;

/// A validated rate increment in ticks per second.
///
/// Construction is the only fallible point; a `RateDelta` in flight is
/// always strictly positive and finite, so the tick loop never has to
/// re-validate command payloads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateDelta(Real);

impl RateDelta {
    pub fn new(delta_tps: Real) -> PlaybackResult<Self> {
        if !delta_tps.is_finite() || delta_tps <= 0.0 {
            return Err(PlaybackError::InvalidArg {
                what: "rate delta must be positive and finite",
            });
        }
        Ok(Self(delta_tps))
    }

    pub fn get(self) -> Real {
        self.0
    }
}

/// Asynchronous user commands, applied at tick boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackCommand {
    TogglePause,
    IncreaseRate(RateDelta),
    DecreaseRate(RateDelta),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_delta() {
        assert_eq!(RateDelta::new(150.0).unwrap().get(), 150.0);
    }

    #[test]
    fn rejects_malformed_deltas() {
        assert!(RateDelta::new(0.0).is_err());
        assert!(RateDelta::new(-10.0).is_err());
        assert!(RateDelta::new(Real::NAN).is_err());
        assert!(RateDelta::new(Real::INFINITY).is_err());
    }
}
