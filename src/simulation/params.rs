//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the per-run settings:
//! - gravitational constant `g` and softening `eps2`,
//! - fixed step size `dt` and total step count `steps`,
//! - the RNG seed used by the initializers
//!
//! These are plain values carried by the scenario and passed into the
//! force evaluator and integrator, so several runs with different
//! parameters can coexist in one process.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,    // step size
    pub eps2: f64,  // softening length squared
    pub g: f64,     // gravitational constant
    pub seed: u64,  // deterministic seed for the initializers
    pub steps: u64, // total steps for the run
}
