//! System initializers
//!
//! Two ways to populate a starting [`System`]:
//! - [`random_system`]: uniform positions in a square, zero velocity,
//!   uniform masses
//! - [`orbital_system`]: a central mass at the origin with satellites on
//!   analytically-derived circular orbits
//!
//! Both take an explicit seed; there is no unseeded variant. Callers that
//! want a fresh run each time derive a seed themselves (the CLI uses the
//! clock and prints the value so the run can be reproduced).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use super::states::{Body, System, NVec2};

/// Placement ranges for [`random_system`]. Defaults mirror the classic
/// toy setup: positions in [0, 1000)^2, masses in [1e5, 1e5 + 1e4).
#[derive(Debug, Clone)]
pub struct RandomInit {
    pub extent: f64,
    pub mass_min: f64,
    pub mass_range: f64,
}

impl Default for RandomInit {
    fn default() -> Self {
        Self {
            extent: 1000.0,
            mass_min: 1.0e5,
            mass_range: 1.0e4,
        }
    }
}

/// Placement ranges for [`orbital_system`].
#[derive(Debug, Clone)]
pub struct OrbitalInit {
    pub central_mass: f64,
    pub satellite_mass_min: f64,
    pub satellite_mass_range: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for OrbitalInit {
    fn default() -> Self {
        Self {
            central_mass: 1.0e6,
            satellite_mass_min: 1.0,
            satellite_mass_range: 10.0,
            radius_min: 50.0,
            radius_max: 400.0,
        }
    }
}

/// Uniform random placement: `n` bodies at rest in `[0, extent)^2` with
/// masses drawn from `[mass_min, mass_min + mass_range)`.
pub fn random_system(n: usize, seed: u64, init: &RandomInit) -> System {
    let mut rng = StdRng::seed_from_u64(seed);
    let bodies = (0..n)
        .map(|_| Body {
            x: NVec2::new(
                rng.gen_range(0.0..init.extent),
                rng.gen_range(0.0..init.extent),
            ),
            v: NVec2::zeros(),
            m: init.mass_min + rng.gen_range(0.0..init.mass_range),
        })
        .collect();
    System { bodies, t: 0.0 }
}

/// Central mass at the origin (body 0, at rest) with `n - 1` satellites
/// at seeded random radii/angles, each given the circular-orbit velocity
/// for the central mass alone. Satellite-satellite attraction is ignored
/// here but fully simulated once stepping begins.
pub fn orbital_system(n: usize, seed: u64, g: f64, init: &OrbitalInit) -> System {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bodies = Vec::with_capacity(n);
    if n > 0 {
        bodies.push(Body {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            m: init.central_mass,
        });
    }
    for _ in 1..n {
        let radius = rng.gen_range(init.radius_min..init.radius_max);
        let angle = rng.gen_range(0.0..TAU);
        let x = radius * NVec2::new(angle.cos(), angle.sin());
        bodies.push(Body {
            x,
            v: circular_velocity(x, g, init.central_mass),
            m: init.satellite_mass_min + rng.gen_range(0.0..init.satellite_mass_range),
        });
    }
    System { bodies, t: 0.0 }
}

/// Velocity for a circular orbit around a mass `central_mass` at the
/// origin, given the radius vector `r` of the orbiting body:
/// speed sqrt(g m0 / |r|) along the perpendicular (-r_y, r_x).
pub fn circular_velocity(r: NVec2, g: f64, central_mass: f64) -> NVec2 {
    let dist = r.norm();
    let speed = (g * central_mass / dist).sqrt();
    let tangent = NVec2::new(-r.y, r.x) / dist;
    speed * tangent
}
