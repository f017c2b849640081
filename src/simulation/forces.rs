//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct-sum Newtonian gravity
//! term with softening. The per-body acceleration buffer is owned by the
//! caller; evaluators only read the system state.

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`].
/// Implementations add their contribution into `out[i]` for each body.
///
/// This is the seam for swapping the force algorithm: anything that maps
/// bodies to accelerations (e.g. a tree code) drops in here.
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct O(N^2) Newtonian gravity with softening.
///
/// For every pair (i, j):
///   a_i += g * m_j * r / (|r|^2 + eps2)^(3/2)
/// with `r` the displacement from i to j. `eps2` keeps the force finite
/// at zero separation; the function is total over any finite input.
pub struct NewtonianGravity {
    pub g: f64,    // gravitational constant
    pub eps2: f64, // softening length squared
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }

        // Unordered pairs (i, j) with i < j; each pair is applied to both
        // bodies with opposite sign, so Newton's third law holds exactly.
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j; i is pulled along +r, j along -r
                let r = bj.x - xi;
                let r2 = r.dot(&r);

                // Softened squared separation
                let d2 = r2 + self.eps2;

                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = g / |r_soft|^3
                let coef = self.g * inv_r3;

                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
