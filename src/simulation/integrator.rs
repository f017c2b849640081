//! Fixed-step time integrators for the N-body system
//!
//! Two strategies, chosen once per run:
//! - semi-implicit Euler (first order, no retained state)
//! - position Verlet (second order, keeps a previous-position window)
//!
//! The strategies need different retained state, so they are variants of
//! one [`Integrator`] enum rather than flags on the body type. Both are
//! driven by an [`AccelSet`] and [`Parameters`], advance `sys.t` by `dt`,
//! and are deterministic for identical inputs.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{System, NVec2};

pub enum Integrator {
    /// v += a dt, then x += v dt with the already-updated velocity.
    SemiImplicitEuler,
    /// x' = 2x - prev + a dt^2, with `prev` the position one step back.
    /// Velocity is reported as the central difference (x' - prev) / (2 dt).
    PositionVerlet { prev: Vec<NVec2> },
}

impl Integrator {
    pub fn semi_implicit_euler() -> Self {
        Integrator::SemiImplicitEuler
    }

    /// Build a position-Verlet integrator for `sys`, synthesizing the
    /// previous positions from one fictitious prior step:
    /// prev[i] = x_i - v_i dt
    pub fn position_verlet(sys: &System, dt: f64) -> Self {
        let prev = sys.bodies.iter().map(|b| b.x - dt * b.v).collect();
        Integrator::PositionVerlet { prev }
    }

    /// Advance the system by one step in place.
    pub fn step(&mut self, sys: &mut System, forces: &AccelSet, params: &Parameters) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }
        let dt = params.dt;

        // a[i] holds the acceleration of body i at the current positions.
        // Every read of position happens before any write, so the whole
        // step sees one consistent snapshot.
        let mut a = vec![NVec2::zeros(); n];
        forces.accumulate_accels(sys.t, &*sys, &mut a);

        match self {
            Integrator::SemiImplicitEuler => {
                for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
                    // Kick first, then drift with the updated velocity
                    b.v += dt * *a;
                    b.x += dt * b.v;
                }
            }
            Integrator::PositionVerlet { prev } => {
                let two_dt = 2.0 * dt;
                for ((b, p_prev), a) in sys.bodies.iter_mut().zip(prev.iter_mut()).zip(a.iter()) {
                    let x_next = 2.0 * b.x - *p_prev + dt * dt * *a;
                    // Central-difference velocity estimate; not used for
                    // the position update itself
                    b.v = (x_next - *p_prev) / two_dt;
                    // Advance the rolling window
                    *p_prev = b.x;
                    b.x = x_next;
                }
            }
        }

        sys.t += dt;
    }
}
