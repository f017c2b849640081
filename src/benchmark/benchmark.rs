use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, NVec2};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            m: 1.0,
        });
    }

    System { bodies, t: 0.0 }
}

fn make_params(steps: u64) -> Parameters {
    Parameters {
        dt: 0.001,
        eps2: 1.0e-4,
        g: 0.1,
        seed: 42,
        steps,
    }
}

/// Time a single direct force evaluation over a ladder of system sizes.
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let params = make_params(1);
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        let gravity = NewtonianGravity {
            g: params.g,
            eps2: params.eps2,
        };

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Per-step wall time for both integrators over a ladder of system sizes.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 4; // integrator steps timed per size

    for n in ns {
        let params = make_params(steps as u64);
        let sys_template = make_system(n);

        let mut per_step = [0.0_f64; 2];
        for (slot, cfg) in per_step
            .iter_mut()
            .zip([IntegratorConfig::Euler, IntegratorConfig::Verlet])
        {
            let mut sys = sys_template.clone();
            let forces = AccelSet::new().with(NewtonianGravity {
                g: params.g,
                eps2: params.eps2,
            });
            let mut integrator = match cfg {
                IntegratorConfig::Euler => Integrator::semi_implicit_euler(),
                IntegratorConfig::Verlet => Integrator::position_verlet(&sys, params.dt),
            };

            // Warm-up
            integrator.step(&mut sys, &forces, &params);

            let t0 = Instant::now();
            for _ in 0..steps {
                integrator.step(&mut sys, &forces, &params);
            }
            *slot = t0.elapsed().as_secs_f64() / steps as f64;
        }

        println!(
            "N = {:5}, euler step = {:8.6} s, verlet step = {:8.6} s",
            n, per_step[0], per_step[1]
        );
    }
}
