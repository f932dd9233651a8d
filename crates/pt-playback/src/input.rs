//! Key-to-command mapping for the input collaborator.
//!
//! The input device itself is not modeled here; whatever produces key names
//! (a window toolkit, a terminal reader, a test) pushes them through this
//! map and forwards the resulting commands to the controller's queue. That
//! keeps ordering and atomicity testable without a live device.

use crate::command::{PlaybackCommand, RateDelta};
use crate::error::{PlaybackError, PlaybackResult};

/// Configurable key bindings plus the rate increment they carry.
#[derive(Clone, Debug, PartialEq)]
pub struct InputMap {
    pause_key: String,
    increase_key: String,
    decrease_key: String,
    rate_delta: RateDelta,
}

impl InputMap {
    pub fn new(
        pause_key: impl Into<String>,
        increase_key: impl Into<String>,
        decrease_key: impl Into<String>,
        rate_delta: RateDelta,
    ) -> PlaybackResult<Self> {
        let pause_key = pause_key.into();
        let increase_key = increase_key.into();
        let decrease_key = decrease_key.into();
        if pause_key == increase_key || pause_key == decrease_key || increase_key == decrease_key {
            return Err(PlaybackError::InvalidArg {
                what: "key bindings must be distinct",
            });
        }
        Ok(Self {
            pause_key,
            increase_key,
            decrease_key,
            rate_delta,
        })
    }

    /// Translate a key press into a command, if the key is bound.
    pub fn command_for(&self, key: &str) -> Option<PlaybackCommand> {
        if key == self.pause_key {
            Some(PlaybackCommand::TogglePause)
        } else if key == self.increase_key {
            Some(PlaybackCommand::IncreaseRate(self.rate_delta))
        } else if key == self.decrease_key {
            Some(PlaybackCommand::DecreaseRate(self.rate_delta))
        } else {
            None
        }
    }

    pub fn rate_delta(&self) -> RateDelta {
        self.rate_delta
    }
}

impl Default for InputMap {
    /// Bindings of the reference animation: `p` pauses, arrow keys change
    /// the rate by a tenth of the default 1500 ticks/s.
    fn default() -> Self {
        Self {
            pause_key: "p".to_string(),
            increase_key: "right".to_string(),
            decrease_key: "left".to_string(),
            rate_delta: RateDelta::new(150.0).expect("default delta is positive"),
        }
    }
}
