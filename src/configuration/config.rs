//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`EngineConfig`]     – integrator choice and trajectory recording
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`InitConfig`]       – how the starting bodies are produced
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"      # or "euler"
//!   record_trajectory: true
//!
//! parameters:
//!   dt: 0.01                  # fixed step size
//!   eps2: 1.0e-4              # softening epsilon^2
//!   G: 1.0                    # gravitational constant
//!   seed: 42                  # seed for the initializers
//!   steps: 1000               # steps to run
//!
//! init:
//!   bodies:
//!     - x: [ -0.5, 0.0 ]
//!       v: [  0.0, 1.0 ]
//!       m: 1.0
//!     - x: [  0.5, 0.0 ]
//!       v: [  0.0, -1.0 ]
//!       m: 1.0
//! ```
//!
//! Instead of an explicit body list, `init` may select a generator:
//!
//! ```yaml
//! init:
//!   random:
//!     n: 100
//!     extent: 1000.0
//!     mass_min: 1.0e5
//!     mass_range: 1.0e4
//! ```
//!
//! ```yaml
//! init:
//!   orbital:
//!     n: 20
//!     central_mass: 1.0e6
//!     radius_min: 50.0
//!     radius_max: 400.0
//! ```
//!
//! The engine maps this configuration into its runtime scenario types.

use serde::Deserialize;

/// Which integrator advances the system state:
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler: first order, velocity kick then drift
    Euler,

    #[serde(rename = "verlet")] // Position Verlet: second order, time-reversible, previous-position window
    Verlet,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
    #[serde(default)]
    pub record_trajectory: bool, // keep per-step positions for playback
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // step size
    pub eps2: f64, // softening - prevents singular forces at very small separations
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub seed: u64, // deterministic seed to make generated systems reproducible
    pub steps: u64, // number of steps to run
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position
    pub v: Vec<f64>, // initial velocity
    pub m: f64,      // mass
}

/// Uniform random placement ranges
#[derive(Deserialize, Debug)]
pub struct RandomInitConfig {
    pub n: usize, // body count
    #[serde(default = "default_extent")]
    pub extent: f64, // positions drawn from [0, extent)^2
    #[serde(default = "default_mass_min")]
    pub mass_min: f64,
    #[serde(default = "default_mass_range")]
    pub mass_range: f64, // masses drawn from [mass_min, mass_min + mass_range)
}

/// Central-mass-plus-satellites placement ranges
#[derive(Deserialize, Debug)]
pub struct OrbitalInitConfig {
    pub n: usize, // body count, including the central body
    #[serde(default = "default_central_mass")]
    pub central_mass: f64,
    #[serde(default = "default_satellite_mass_min")]
    pub satellite_mass_min: f64,
    #[serde(default = "default_satellite_mass_range")]
    pub satellite_mass_range: f64,
    #[serde(default = "default_radius_min")]
    pub radius_min: f64,
    #[serde(default = "default_radius_max")]
    pub radius_max: f64,
}

impl Default for RandomInitConfig {
    fn default() -> Self {
        Self {
            n: 0,
            extent: default_extent(),
            mass_min: default_mass_min(),
            mass_range: default_mass_range(),
        }
    }
}

impl Default for OrbitalInitConfig {
    fn default() -> Self {
        Self {
            n: 0,
            central_mass: default_central_mass(),
            satellite_mass_min: default_satellite_mass_min(),
            satellite_mass_range: default_satellite_mass_range(),
            radius_min: default_radius_min(),
            radius_max: default_radius_max(),
        }
    }
}

/// How the starting system is produced: an explicit body list, or one of
/// the seeded generators.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum InitConfig {
    Bodies(Vec<BodyConfig>),
    Random(RandomInitConfig),
    Orbital(OrbitalInitConfig),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // integrator and recording options
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub init: InitConfig,             // initial state of the system
}

fn default_extent() -> f64 {
    1000.0
}
fn default_mass_min() -> f64 {
    1.0e5
}
fn default_mass_range() -> f64 {
    1.0e4
}
fn default_central_mass() -> f64 {
    1.0e6
}
fn default_satellite_mass_min() -> f64 {
    1.0
}
fn default_satellite_mass_range() -> f64 {
    10.0
}
fn default_radius_min() -> f64 {
    50.0
}
fn default_radius_max() -> f64 {
    400.0
}
