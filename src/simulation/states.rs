//! Core state types for the N-body simulation.
//!
//! A [`Body`] is a point mass: position, velocity, mass. Acceleration is
//! never stored on the body; the force evaluator writes into a per-step
//! buffer, and the Verlet integrator keeps its previous-position window
//! internally. The [`System`] holds the list of bodies and the current
//! simulation time `t`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64,   // mass, > 0
}

/// Collection of bodies plus the current time. The body count is fixed
/// for the lifetime of a run; a body's index is its identity.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64,
}
