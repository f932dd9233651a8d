//! Analytic trajectory model.

use crate::error::ModelResult;
use crate::modes::ModeFrequencies;
use crate::report::TrajectoryReport;
use pt_core::{clamp_unit, Real, Vec3};
use pt_trap::{InitialState, Ion, PenningTrap};

/// Closed-form single-ion trajectory.
///
/// Everything is derived once at construction; `position` and `velocity` are
/// pure functions of simulated time with no dependence on playback state or
/// wall clock. Construction fails when the motion is not bounded, so a
/// constructed model is always evaluable.
#[derive(Clone, Debug)]
pub struct TrajectoryModel {
    ion: Ion,
    trap: PenningTrap,
    initial: InitialState,
    frequencies: ModeFrequencies,
    polarity: Real,
    // Mode amplitudes (m)
    r_plus: Real,
    r_minus: Real,
    r_axial: Real,
    // Phase constants (rad)
    phi_plus: Real,
    phi_minus: Real,
    phi_axial: Real,
}

/// Phase constant of one harmonic mode from its cosine and sine projections.
///
/// Both projections share the same (signed, nonzero) scale, so the cosine
/// ratio fixes |phi| via acos and the sine ratio picks the branch. A mode
/// with zero amplitude carries no phase information; zero is used.
fn mode_phase(amplitude: Real, scale: Real, cos_num: Real, sin_num: Real) -> Real {
    if amplitude == 0.0 {
        return 0.0;
    }
    let phi = clamp_unit(cos_num / (amplitude * scale)).acos();
    if sin_num / scale < 0.0 {
        -phi
    } else {
        phi
    }
}

impl TrajectoryModel {
    /// Derive eigenfrequencies, amplitudes and phases.
    ///
    /// Fails with [`crate::ModelError::UnboundedMotion`] when the trap does
    /// not confine the ion; no evaluation is meaningful in that case.
    pub fn new(trap: PenningTrap, ion: Ion, initial: InitialState) -> ModelResult<Self> {
        let frequencies = ModeFrequencies::derive(&trap, &ion)?;
        let sigma = ion.polarity();

        let s0 = initial.position;
        let v0 = initial.velocity;
        let omega_plus = frequencies.modified_cyclotron;
        let omega_minus = frequencies.magnetron;
        let omega_z = frequencies.axial;

        // Radial mode projections. Boundedness guarantees
        // omega_minus != omega_plus, so the denominators are nonzero.
        let plus_cos = sigma * v0.y + omega_minus * s0.x;
        let plus_sin = v0.x - sigma * omega_minus * s0.y;
        let minus_cos = sigma * v0.y + omega_plus * s0.x;
        let minus_sin = v0.x - sigma * omega_plus * s0.y;

        let split = omega_minus - omega_plus;
        let r_plus = plus_cos.hypot(plus_sin) / split.abs();
        let r_minus = minus_cos.hypot(minus_sin) / split.abs();
        let r_axial = (s0.z * s0.z + (v0.z * v0.z) / (omega_z * omega_z)).sqrt();

        let phi_plus = mode_phase(r_plus, split, plus_cos, plus_sin);
        let phi_minus = mode_phase(r_minus, -split, minus_cos, minus_sin);
        let phi_axial = mode_phase(r_axial, 1.0, s0.z, -v0.z / omega_z);

        Ok(Self {
            ion,
            trap,
            initial,
            frequencies,
            polarity: sigma,
            r_plus,
            r_minus,
            r_axial,
            phi_plus,
            phi_minus,
            phi_axial,
        })
    }

    /// Position (m) at simulated time `t` (s). Pure.
    pub fn position(&self, t: Real) -> Vec3 {
        let f = &self.frequencies;
        let arg_plus = f.modified_cyclotron * t + self.phi_plus;
        let arg_minus = f.magnetron * t + self.phi_minus;
        let arg_z = f.axial * t + self.phi_axial;

        let x = self.r_plus * arg_plus.cos() + self.r_minus * arg_minus.cos();
        let y = -self.polarity * (self.r_plus * arg_plus.sin() + self.r_minus * arg_minus.sin());
        let z = self.r_axial * arg_z.cos();
        Vec3::new(x, y, z)
    }

    /// Velocity (m/s) at simulated time `t` (s). Analytic derivative of
    /// [`Self::position`]; pure.
    pub fn velocity(&self, t: Real) -> Vec3 {
        let f = &self.frequencies;
        let arg_plus = f.modified_cyclotron * t + self.phi_plus;
        let arg_minus = f.magnetron * t + self.phi_minus;
        let arg_z = f.axial * t + self.phi_axial;

        let vx = -self.r_plus * f.modified_cyclotron * arg_plus.sin()
            - self.r_minus * f.magnetron * arg_minus.sin();
        let vy = -self.polarity
            * (self.r_plus * f.modified_cyclotron * arg_plus.cos()
                + self.r_minus * f.magnetron * arg_minus.cos());
        let vz = -self.r_axial * f.axial * arg_z.sin();
        Vec3::new(vx, vy, vz)
    }

    pub fn ion(&self) -> &Ion {
        &self.ion
    }

    pub fn trap(&self) -> &PenningTrap {
        &self.trap
    }

    pub fn initial(&self) -> &InitialState {
        &self.initial
    }

    pub fn frequencies(&self) -> &ModeFrequencies {
        &self.frequencies
    }

    /// Amplitudes of the (modified cyclotron, magnetron, axial) modes in m.
    pub fn amplitudes(&self) -> (Real, Real, Real) {
        (self.r_plus, self.r_minus, self.r_axial)
    }

    /// Phase constants of the (modified cyclotron, magnetron, axial) modes in rad.
    pub fn phases(&self) -> (Real, Real, Real) {
        (self.phi_plus, self.phi_minus, self.phi_axial)
    }

    /// Human-readable dump of every derived quantity. Informational only.
    pub fn report(&self) -> TrajectoryReport {
        TrajectoryReport::from_model(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::{nearly_equal, Tolerances};
    use pt_trap::{rb85, titan};

    fn reference_model() -> TrajectoryModel {
        let initial = InitialState::new(Vec3::new(1e-3, 1e-3, 1e-3), Vec3::new(300.0, 400.0, 50.0));
        TrajectoryModel::new(titan(), rb85(), initial).unwrap()
    }

    fn assert_vec_close(a: Vec3, b: Vec3, tol: Tolerances) {
        for i in 0..3 {
            assert!(
                nearly_equal(a[i], b[i], tol),
                "component {i}: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn position_at_zero_reconstructs_initial_position() {
        let model = reference_model();
        assert_vec_close(
            model.position(0.0),
            model.initial().position,
            Tolerances::default(),
        );
    }

    #[test]
    fn velocity_at_zero_reconstructs_initial_velocity() {
        let model = reference_model();
        // Velocities are hundreds of m/s; scale the absolute tolerance.
        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-9,
        };
        assert_vec_close(model.velocity(0.0), model.initial().velocity, tol);
    }

    #[test]
    fn expected_amplitudes_for_reference_scenario() {
        let model = reference_model();
        let (r_plus, r_minus, r_axial) = model.amplitudes();
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-6,
        };
        assert!(nearly_equal(r_plus, 1.238_757e-4, tol));
        assert!(nearly_equal(r_minus, 1.449_659e-3, tol));
        assert!(nearly_equal(r_axial, 1.003_863e-3, tol));
    }

    #[test]
    fn finite_difference_matches_analytic_velocity() {
        let model = reference_model();
        // Central difference at a few interior times; h well below the
        // fastest period (~1.5e-6 s).
        let h = 1e-12;
        for &t in &[3.7e-7, 1.9e-6, 8.4e-6] {
            let fd = (model.position(t + h) - model.position(t - h)) / (2.0 * h);
            let v = model.velocity(t);
            for i in 0..3 {
                let denom = v[i].abs().max(1.0);
                assert!(
                    ((fd[i] - v[i]) / denom).abs() < 1e-3,
                    "t={t}, component {i}: fd={} analytic={}",
                    fd[i],
                    v[i]
                );
            }
        }
    }

    #[test]
    fn position_is_deterministic() {
        let model = reference_model();
        let t = 2.5e-6;
        assert_eq!(model.position(t), model.position(t));
    }

    #[test]
    fn zero_amplitude_modes_stay_at_origin() {
        // Ion starting at rest on the trap axis center: only trivial motion.
        let initial = InitialState::new(Vec3::zeros(), Vec3::zeros());
        let model = TrajectoryModel::new(titan(), rb85(), initial).unwrap();
        let (r_plus, r_minus, r_axial) = model.amplitudes();
        assert_eq!((r_plus, r_minus, r_axial), (0.0, 0.0, 0.0));
        let p = model.position(1e-5);
        assert_eq!(p, Vec3::zeros());
        // Phases fall back to zero instead of NaN.
        let (phi_plus, phi_minus, phi_axial) = model.phases();
        assert_eq!((phi_plus, phi_minus, phi_axial), (0.0, 0.0, 0.0));
    }

    proptest::proptest! {
        /// position(0) reconstructs s0 for arbitrary bounded initial
        /// conditions, including negative-charge ions in an inverted well.
        #[test]
        fn initial_position_reconstruction(
            sx in -1e-3f64..1e-3, sy in -1e-3f64..1e-3, sz in -1e-3f64..1e-3,
            vx in -500.0f64..500.0, vy in -500.0f64..500.0, vz in -500.0f64..500.0,
        ) {
            let initial = InitialState::new(Vec3::new(sx, sy, sz), Vec3::new(vx, vy, vz));
            let model = TrajectoryModel::new(titan(), rb85(), initial).unwrap();
            let p0 = model.position(0.0);
            let tol = Tolerances { abs: 1e-9, rel: 1e-6 };
            for i in 0..3 {
                proptest::prop_assert!(nearly_equal(p0[i], initial.position[i], tol));
            }
        }
    }
}
