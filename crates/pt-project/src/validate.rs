//! Scenario validation logic.

use crate::schema::{GeometryDef, IonDef, Scenario, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown catalog ion: {name}")]
    UnknownIon { name: String },

    #[error("Key bindings must be distinct: {key}")]
    DuplicateKey { key: String },
}

const CATALOG_IONS: &[&str] = &["proton", "electron", "rb-85", "rb85", "rb-87", "rb87"];

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        })
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    require_finite("trap.b0_tesla", scenario.trap.b0_tesla)?;
    require_finite("trap.u0_volt", scenario.trap.u0_volt)?;
    match scenario.trap.geometry {
        GeometryDef::Dimension { d_m } => require_positive("trap.geometry.d_m", d_m)?,
        GeometryDef::HalfAxes { z0_m, rho0_m } => {
            require_positive("trap.geometry.z0_m", z0_m)?;
            require_positive("trap.geometry.rho0_m", rho0_m)?;
        }
    }
    if let Some(u) = scenario.trap.voltage_override_volt {
        require_finite("trap.voltage_override_volt", u)?;
    }
    if let Some(b) = scenario.trap.field_override_tesla {
        require_finite("trap.field_override_tesla", b)?;
    }

    match &scenario.ion {
        IonDef::Catalog { name } => {
            if !CATALOG_IONS.contains(&name.to_ascii_lowercase().as_str()) {
                return Err(ValidationError::UnknownIon { name: name.clone() });
            }
        }
        IonDef::Custom {
            mass_amu, charge_e, ..
        } => {
            require_positive("ion.mass_amu", *mass_amu)?;
            require_finite("ion.charge_e", *charge_e)?;
            if *charge_e == 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: "ion.charge_e",
                    value: 0.0,
                    reason: "must be nonzero",
                });
            }
        }
    }

    for v in scenario
        .initial
        .position_m
        .iter()
        .chain(scenario.initial.velocity_mps.iter())
    {
        require_finite("initial state component", *v)?;
    }

    let playback = &scenario.playback;
    require_positive("playback.step_size_s", playback.step_size_s)?;
    if playback.step_count == 0 {
        return Err(ValidationError::InvalidValue {
            field: "playback.step_count",
            value: 0.0,
            reason: "must be positive",
        });
    }
    require_positive("playback.initial_rate_tps", playback.initial_rate_tps)?;
    require_positive("playback.rate_increment_tps", playback.rate_increment_tps)?;
    require_positive("playback.display_scale", playback.display_scale)?;

    let input = &scenario.input;
    if input.pause_key == input.increase_key
        || input.pause_key == input.decrease_key
        || input.increase_key == input.decrease_key
    {
        return Err(ValidationError::DuplicateKey {
            key: input.pause_key.clone(),
        });
    }

    Ok(())
}
