//! Diagnostic dump of derived trajectory quantities.

use crate::model::TrajectoryModel;
use core::fmt;
use pt_core::Real;
use std::f64::consts::TAU;

/// Snapshot of everything the model derived, for inspection and logging.
///
/// Purely informational; nothing here feeds back into evaluation, and the
/// text form is not a machine-parseable artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryReport {
    pub ion_label: String,
    pub mass_kg: Real,
    pub charge_c: Real,

    pub initial_radial_m: Real,
    pub initial_axial_m: Real,
    pub initial_radial_speed_mps: Real,
    pub initial_axial_speed_mps: Real,

    pub trap_label: String,
    pub voltage_v: Real,
    pub field_t: Real,
    pub dimension_m: Real,

    pub omega_cyclotron: Real,
    pub omega_plus: Real,
    pub omega_minus: Real,
    pub omega_axial: Real,

    pub amplitude_plus_m: Real,
    pub amplitude_minus_m: Real,
    pub amplitude_axial_m: Real,

    pub phase_plus_rad: Real,
    pub phase_minus_rad: Real,
    pub phase_axial_rad: Real,
}

impl TrajectoryReport {
    pub(crate) fn from_model(model: &TrajectoryModel) -> Self {
        let f = model.frequencies();
        let (r_plus, r_minus, r_axial) = model.amplitudes();
        let (phi_plus, phi_minus, phi_axial) = model.phases();
        let initial = model.initial();
        Self {
            ion_label: model.ion().label().to_string(),
            mass_kg: model.ion().mass_kg(),
            charge_c: model.ion().charge_c(),
            initial_radial_m: initial.radial_position(),
            initial_axial_m: initial.axial_position(),
            initial_radial_speed_mps: initial.radial_speed(),
            initial_axial_speed_mps: initial.axial_speed(),
            trap_label: model.trap().label().to_string(),
            voltage_v: model.trap().voltage_v(),
            field_t: model.trap().field_t(),
            dimension_m: model.trap().dimension_m(),
            omega_cyclotron: f.cyclotron,
            omega_plus: f.modified_cyclotron,
            omega_minus: f.magnetron,
            omega_axial: f.axial,
            amplitude_plus_m: r_plus,
            amplitude_minus_m: r_minus,
            amplitude_axial_m: r_axial,
            phase_plus_rad: phi_plus,
            phase_minus_rad: phi_minus,
            phase_axial_rad: phi_axial,
        }
    }

    /// Linear frequencies in Hz: (cyclotron, modified cyclotron, magnetron, axial).
    pub fn frequencies_hz(&self) -> (Real, Real, Real, Real) {
        (
            self.omega_cyclotron / TAU,
            self.omega_plus / TAU,
            self.omega_minus / TAU,
            self.omega_axial / TAU,
        )
    }
}

impl fmt::Display for TrajectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nu_c, nu_plus, nu_minus, nu_z) = self.frequencies_hz();
        writeln!(f, "Ion:              {}", self.ion_label)?;
        writeln!(f, "M (kg) =          {:e}", self.mass_kg)?;
        writeln!(f, "Q (C) =           {:e}", self.charge_c)?;
        writeln!(f)?;
        writeln!(f, "Initial conditions:")?;
        writeln!(f, "s0_r (m) =        {:e}", self.initial_radial_m)?;
        writeln!(f, "s0_z (m) =        {:e}", self.initial_axial_m)?;
        writeln!(f, "v0_r (m/s) =      {}", self.initial_radial_speed_mps)?;
        writeln!(f, "v0_z (m/s) =      {}", self.initial_axial_speed_mps)?;
        writeln!(f)?;
        writeln!(f, "Penning Trap:     {}", self.trap_label)?;
        writeln!(f, "U_0 (V) =         {}", self.voltage_v)?;
        writeln!(f, "B_0 (T) =         {}", self.field_t)?;
        writeln!(f, "d_0 (m) =         {:e}", self.dimension_m)?;
        writeln!(f)?;
        writeln!(f, "Eigenfrequencies:")?;
        writeln!(f, "omega_c (rad/s) = {:.6e}", self.omega_cyclotron)?;
        writeln!(f, "omega_+ (rad/s) = {:.6e}", self.omega_plus)?;
        writeln!(f, "omega_- (rad/s) = {:.6e}", self.omega_minus)?;
        writeln!(f, "omega_z (rad/s) = {:.6e}", self.omega_axial)?;
        writeln!(f)?;
        writeln!(f, "Frequencies:")?;
        writeln!(f, "nu_c (Hz) =       {:.6e}", nu_c)?;
        writeln!(f, "nu_+ (Hz) =       {:.6e}", nu_plus)?;
        writeln!(f, "nu_- (Hz) =       {:.6e}", nu_minus)?;
        writeln!(f, "nu_z (Hz) =       {:.6e}", nu_z)?;
        writeln!(f)?;
        writeln!(f, "Radius:")?;
        writeln!(f, "R_+ (m) =         {:.6e}", self.amplitude_plus_m)?;
        writeln!(f, "R_- (m) =         {:.6e}", self.amplitude_minus_m)?;
        writeln!(f, "R_z (m) =         {:.6e}", self.amplitude_axial_m)?;
        writeln!(f)?;
        writeln!(f, "Phase constants:")?;
        writeln!(f, "phi_+ (rad) =     {:.6}", self.phase_plus_rad)?;
        writeln!(f, "phi_- (rad) =     {:.6}", self.phase_minus_rad)?;
        write!(f, "phi_z (rad) =     {:.6}", self.phase_axial_rad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::Vec3;
    use pt_trap::{rb85, titan, InitialState};

    #[test]
    fn report_round_numbers() {
        let initial =
            InitialState::new(Vec3::new(1e-3, 1e-3, 1e-3), Vec3::new(300.0, 400.0, 50.0));
        let model = crate::TrajectoryModel::new(titan(), rb85(), initial).unwrap();
        let report = model.report();

        assert_eq!(report.ion_label, "Rb-85");
        assert_eq!(report.trap_label, "TITAN");
        let (nu_c, ..) = report.frequencies_hz();
        assert!((nu_c - report.omega_cyclotron / TAU).abs() < 1e-9);

        let text = report.to_string();
        assert!(text.contains("Eigenfrequencies:"));
        assert!(text.contains("omega_+"));
        assert!(text.contains("Rb-85"));
    }
}
