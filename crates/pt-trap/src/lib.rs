//! pt-trap: immutable physical entities for the trap simulation.
//!
//! Provides:
//! - `Ion`: charged particle (mass, charge, label)
//! - `PenningTrap`: field/voltage/geometry configuration
//! - `InitialState`: position and velocity at simulated time zero
//! - a small catalog of standard ions and the TITAN trap

pub mod catalog;
pub mod error;
pub mod initial;
pub mod ion;
pub mod trap;

pub use catalog::{electron, ion_by_name, proton, rb85, rb87, titan};
pub use error::{TrapError, TrapResult};
pub use initial::InitialState;
pub use ion::Ion;
pub use trap::{PenningTrap, TrapGeometry};
