//! pt-model: closed-form trajectory of a single ion in a Penning trap.
//!
//! The linearized equations of motion decompose into three independent
//! harmonic modes: modified cyclotron (fast radial), magnetron (slow radial
//! drift) and axial. This crate derives the three eigenfrequencies, the mode
//! amplitudes and the phase constants once from trap, ion and initial state,
//! then evaluates position and velocity as pure functions of simulated time.
//!
//! No numerical integration happens anywhere in this crate.

pub mod error;
pub mod model;
pub mod modes;
pub mod report;

pub use error::{ModelError, ModelResult};
pub use model::TrajectoryModel;
pub use modes::ModeFrequencies;
pub use report::TrajectoryReport;
