//! Step-loop driver
//!
//! [`Simulation`] owns a fully-built [`Scenario`] and sequences the run:
//! force evaluation, then integration, then (optionally) appending to the
//! trajectory log, exactly `steps` times. It does no numerical work of
//! its own.
//!
//! Constructing a `Simulation` from a populated scenario is the
//! uninitialized-to-running transition; an unpopulated driver is not
//! representable. Once the final step has run the state is `Completed`
//! and further `step` calls do nothing.

use std::time::{Duration, Instant};

use super::integrator::Integrator;
use super::scenario::Scenario;
use super::states::System;
use super::trajectory::TrajectoryLog;
use crate::configuration::config::IntegratorConfig;
use crate::simulation::params::Parameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    Completed,
}

pub struct Simulation {
    scenario: Scenario,
    integrator: Integrator,
    steps_done: u64,
    trajectory: Option<TrajectoryLog>,
}

impl Simulation {
    /// Build the driver from a scenario: instantiate the configured
    /// integrator (bootstrapping the Verlet window from the initial
    /// velocities) and pre-size the trajectory log if recording.
    pub fn new(scenario: Scenario) -> Self {
        let integrator = match scenario.engine.integrator {
            IntegratorConfig::Euler => Integrator::semi_implicit_euler(),
            IntegratorConfig::Verlet => {
                Integrator::position_verlet(&scenario.system, scenario.parameters.dt)
            }
        };
        let trajectory = if scenario.engine.record_trajectory {
            Some(TrajectoryLog::new(
                scenario.system.bodies.len(),
                scenario.parameters.steps as usize,
            ))
        } else {
            None
        };
        Self {
            scenario,
            integrator,
            steps_done: 0,
            trajectory,
        }
    }

    pub fn state(&self) -> SimState {
        if self.steps_done >= self.scenario.parameters.steps {
            SimState::Completed
        } else {
            SimState::Running
        }
    }

    /// Advance one step. Returns `false` (and leaves all state untouched)
    /// once the configured step count has been reached.
    pub fn step(&mut self) -> bool {
        if self.state() == SimState::Completed {
            return false;
        }
        let Scenario {
            system,
            parameters,
            forces,
            ..
        } = &mut self.scenario;
        self.integrator.step(system, forces, parameters);
        if let Some(log) = &mut self.trajectory {
            log.record(system);
        }
        self.steps_done += 1;
        true
    }

    /// Run to completion, returning the wall-clock time of the step loop.
    pub fn run(&mut self) -> Duration {
        let start = Instant::now();
        while self.step() {}
        start.elapsed()
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.scenario.parameters
    }

    pub fn steps_done(&self) -> u64 {
        self.steps_done
    }

    pub fn trajectory(&self) -> Option<&TrajectoryLog> {
        self.trajectory.as_ref()
    }

    /// Hand the recorded trajectory to a consumer (e.g. the viewer).
    pub fn into_trajectory(self) -> Option<TrajectoryLog> {
        self.trajectory
    }
}
