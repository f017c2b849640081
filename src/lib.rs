pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::Integrator;
pub use simulation::init::{circular_velocity, orbital_system, random_system, OrbitalInit, RandomInit};
pub use simulation::trajectory::TrajectoryLog;
pub use simulation::driver::{SimState, Simulation};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, InitConfig, IntegratorConfig, OrbitalInitConfig, ParametersConfig,
    RandomInitConfig, ScenarioConfig,
};

pub use visualization::gravsim_vis2d::{run_playback, PlaybackScene};

pub use benchmark::benchmark::{bench_gravity, bench_step};
