//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The driver consumes a `Scenario` and owns it for the run.

use crate::configuration::config::{InitConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::init::{self, OrbitalInit, RandomInit};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, NVec2};

/// A fully-initialized simulation scenario: the "runtime bundle"
/// constructed from a [`ScenarioConfig`], ready to hand to the driver.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            eps2: p_cfg.eps2,
            g: p_cfg.g,
            seed: p_cfg.seed,
            steps: p_cfg.steps,
        };

        // Starting bodies: explicit list, or one of the seeded generators
        let system = match cfg.init {
            InitConfig::Bodies(list) => {
                let bodies: Vec<Body> = list
                    .iter()
                    .map(|bc| Body {
                        x: NVec2::new(bc.x[0], bc.x[1]),
                        v: NVec2::new(bc.v[0], bc.v[1]),
                        m: bc.m,
                    })
                    .collect();
                System { bodies, t: 0.0 }
            }
            InitConfig::Random(rc) => init::random_system(
                rc.n,
                parameters.seed,
                &RandomInit {
                    extent: rc.extent,
                    mass_min: rc.mass_min,
                    mass_range: rc.mass_range,
                },
            ),
            InitConfig::Orbital(oc) => init::orbital_system(
                oc.n,
                parameters.seed,
                parameters.g,
                &OrbitalInit {
                    central_mass: oc.central_mass,
                    satellite_mass_min: oc.satellite_mass_min,
                    satellite_mass_range: oc.satellite_mass_range,
                    radius_min: oc.radius_min,
                    radius_max: oc.radius_max,
                },
            ),
        };

        let engine = Engine {
            integrator: cfg.engine.integrator,
            record_trajectory: cfg.engine.record_trajectory,
        };

        // Forces: register direct Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        });

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }
}
