//! Compile a scenario definition into runtime objects.

use crate::error::{AppError, AppResult};
use pt_core::units::constants::{amu, elementary_charges};
use pt_core::units::{m, tesla, volt};
use pt_core::Vec3;
use pt_model::TrajectoryModel;
use pt_playback::{InputMap, PlaybackOptions, RateDelta};
use pt_project::{GeometryDef, IonDef, Scenario, TrapDef};
use pt_trap::{ion_by_name, InitialState, Ion, PenningTrap, TrapGeometry};

/// Everything a frontend needs to run a scenario.
#[derive(Debug)]
pub struct ScenarioRuntime {
    pub name: String,
    pub model: TrajectoryModel,
    pub playback: PlaybackOptions,
    pub input: InputMap,
}

fn build_ion(def: &IonDef) -> AppResult<Ion> {
    match def {
        IonDef::Catalog { name } => {
            ion_by_name(name).ok_or_else(|| AppError::UnknownIon(name.clone()))
        }
        IonDef::Custom {
            mass_amu,
            charge_e,
            label,
        } => Ok(Ion::new(
            amu(*mass_amu),
            elementary_charges(*charge_e),
            label.clone(),
        )?),
    }
}

fn build_trap(def: &TrapDef) -> AppResult<PenningTrap> {
    let geometry = match def.geometry {
        GeometryDef::Dimension { d_m } => TrapGeometry::CharacteristicDimension(m(d_m)),
        GeometryDef::HalfAxes { z0_m, rho0_m } => TrapGeometry::HalfAxes {
            z0: m(z0_m),
            rho0: m(rho0_m),
        },
    };
    let mut trap = PenningTrap::new(
        tesla(def.b0_tesla),
        volt(def.u0_volt),
        geometry,
        def.label.as_str(),
    )?;
    if let Some(u) = def.voltage_override_volt {
        trap = trap.with_voltage(volt(u));
    }
    if let Some(b) = def.field_override_tesla {
        trap = trap.with_magnetic_field(tesla(b));
    }
    Ok(trap)
}

/// Validate and assemble the scenario. Fails with
/// [`AppError::UnboundedMotion`] when the configured trap cannot confine
/// the configured ion.
pub fn compile_scenario(scenario: &Scenario) -> AppResult<ScenarioRuntime> {
    pt_project::validate_scenario(scenario).map_err(|e| AppError::Scenario(e.to_string()))?;

    let ion = build_ion(&scenario.ion)?;
    let trap = build_trap(&scenario.trap)?;
    let initial = InitialState::new(
        Vec3::from(scenario.initial.position_m),
        Vec3::from(scenario.initial.velocity_mps),
    );

    let model = TrajectoryModel::new(trap, ion, initial)?;

    let playback = PlaybackOptions {
        step_size_s: scenario.playback.step_size_s,
        step_count: scenario.playback.step_count,
        initial_rate_tps: scenario.playback.initial_rate_tps,
        start_paused: scenario.playback.start_paused,
        display_scale: scenario.playback.display_scale,
    };
    let input = InputMap::new(
        scenario.input.pause_key.as_str(),
        scenario.input.increase_key.as_str(),
        scenario.input.decrease_key.as_str(),
        RateDelta::new(scenario.playback.rate_increment_tps)?,
    )?;

    Ok(ScenarioRuntime {
        name: scenario.name.clone(),
        model,
        playback,
        input,
    })
}
