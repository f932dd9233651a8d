//! Shared application service layer for the trap animation.
//!
//! Centralizes the logic both the CLI and any graphical frontend need:
//! compiling a scenario definition into runtime objects, producing the
//! diagnostic report, and running playback on a worker thread.

pub mod compile;
pub mod error;
pub mod run_service;

pub use compile::{compile_scenario, ScenarioRuntime};
pub use error::{AppError, AppResult};
pub use run_service::{describe_scenario, PlaybackWorker};
