//! Initial kinematic state of the ion.

use pt_core::{Real, Vec3};

/// Position and velocity in the trap frame at simulated time zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl InitialState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Radial distance from the trap axis, sqrt(x^2 + y^2).
    pub fn radial_position(&self) -> Real {
        self.position.x.hypot(self.position.y)
    }

    /// Distance along the trap axis, |z|.
    pub fn axial_position(&self) -> Real {
        self.position.z.abs()
    }

    /// Speed in the radial plane.
    pub fn radial_speed(&self) -> Real {
        self.velocity.x.hypot(self.velocity.y)
    }

    /// Speed along the trap axis.
    pub fn axial_speed(&self) -> Real {
        self.velocity.z.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections() {
        let state = InitialState::new(Vec3::new(3e-3, 4e-3, -2e-3), Vec3::new(300.0, 400.0, -50.0));
        assert!((state.radial_position() - 5e-3).abs() < 1e-12);
        assert_eq!(state.axial_position(), 2e-3);
        assert!((state.radial_speed() - 500.0).abs() < 1e-9);
        assert_eq!(state.axial_speed(), 50.0);
    }
}
