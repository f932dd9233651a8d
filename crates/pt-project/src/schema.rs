//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub trap: TrapDef,
    pub ion: IonDef,
    pub initial: InitialStateDef,
    #[serde(default)]
    pub playback: PlaybackDef,
    #[serde(default)]
    pub input: InputDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrapDef {
    pub b0_tesla: f64,
    pub u0_volt: f64,
    pub geometry: GeometryDef,
    #[serde(default)]
    pub label: String,
    /// Explicit overrides replacing the original's false-like sentinel
    /// parameters: absent means "use the values above".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_override_volt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_override_tesla: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GeometryDef {
    /// Characteristic dimension supplied directly.
    Dimension { d_m: f64 },
    /// Derived from electrode half-axes.
    HalfAxes { z0_m: f64, rho0_m: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum IonDef {
    /// One of the built-in catalog ions, by label.
    Catalog { name: String },
    /// Fully specified particle.
    Custom {
        mass_amu: f64,
        charge_e: f64,
        label: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InitialStateDef {
    pub position_m: [f64; 3],
    pub velocity_mps: [f64; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackDef {
    #[serde(default = "default_step_size_s")]
    pub step_size_s: f64,
    #[serde(default = "default_step_count")]
    pub step_count: usize,
    #[serde(default = "default_rate_tps")]
    pub initial_rate_tps: f64,
    #[serde(default = "default_rate_increment_tps")]
    pub rate_increment_tps: f64,
    #[serde(default = "default_start_paused")]
    pub start_paused: bool,
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,
}

fn default_step_size_s() -> f64 {
    5e-9
}

fn default_step_count() -> usize {
    1_000_000
}

fn default_rate_tps() -> f64 {
    1500.0
}

fn default_rate_increment_tps() -> f64 {
    150.0
}

fn default_start_paused() -> bool {
    true
}

fn default_display_scale() -> f64 {
    1e5
}

impl Default for PlaybackDef {
    fn default() -> Self {
        Self {
            step_size_s: default_step_size_s(),
            step_count: default_step_count(),
            initial_rate_tps: default_rate_tps(),
            rate_increment_tps: default_rate_increment_tps(),
            start_paused: default_start_paused(),
            display_scale: default_display_scale(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputDef {
    #[serde(default = "default_pause_key")]
    pub pause_key: String,
    #[serde(default = "default_increase_key")]
    pub increase_key: String,
    #[serde(default = "default_decrease_key")]
    pub decrease_key: String,
}

fn default_pause_key() -> String {
    "p".to_string()
}

fn default_increase_key() -> String {
    "right".to_string()
}

fn default_decrease_key() -> String {
    "left".to_string()
}

impl Default for InputDef {
    fn default() -> Self {
        Self {
            pause_key: default_pause_key(),
            increase_key: default_increase_key(),
            decrease_key: default_decrease_key(),
        }
    }
}
