//! pt-playback: real-time stepping loop for the trajectory animation.
//!
//! Provides:
//! - `PlaybackController`: owns the step index, pause flag and playback rate;
//!   advances simulated time tick by tick and emits frames
//! - validated rate-change commands and a single-consumer command queue
//! - `Pacer`: rate limiter between ticks (sleeping or no-op for tests)
//! - `InputMap`: key-to-command mapping for the input collaborator
//!
//! The controller never touches rendering state; frames go out through one
//! channel and commands come in through another, drained once per tick.

pub mod command;
pub mod controller;
pub mod error;
pub mod input;
pub mod pacer;
pub mod runner;
pub mod state;

pub use command::{PlaybackCommand, RateDelta};
pub use controller::{CommandSender, Frame, PlaybackController, PlaybackOptions};
pub use error::{PlaybackError, PlaybackResult};
pub use input::InputMap;
pub use pacer::{NoopPacer, Pacer, SleepPacer};
pub use runner::run_playback;
pub use state::{PlaybackPhase, PlaybackState};
