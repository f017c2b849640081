use gravsim::{
    EngineConfig, InitConfig, IntegratorConfig, OrbitalInitConfig, ParametersConfig,
    RandomInitConfig, Scenario, ScenarioConfig, Simulation,
};
use gravsim::{run_playback, PlaybackScene};
use gravsim::{bench_gravity, bench_step};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "gravsim", about = "2D gravitational N-body simulator")]
struct Args {
    /// Number of bodies
    #[arg(required_unless_present = "file")]
    bodies: Option<usize>,

    /// Number of time steps
    #[arg(required_unless_present = "file")]
    steps: Option<u64>,

    /// Load a full scenario from a YAML file instead of generating one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed for the initializer; without it a clock-derived seed is used
    /// and printed so the run can be reproduced
    #[arg(long)]
    seed: Option<u64>,

    /// Integration strategy
    #[arg(long, value_enum, default_value_t = IntegratorArg::Euler)]
    integrator: IntegratorArg,

    /// Initial placement strategy
    #[arg(long, value_enum, default_value_t = InitArg::Random)]
    init: InitArg,

    /// Step size
    #[arg(long, default_value_t = 0.01)]
    dt: f64,

    /// Gravitational constant
    #[arg(long, default_value_t = 6.67430e-11)]
    gravity: f64,

    /// Softening length squared
    #[arg(long, default_value_t = 1.0e-4)]
    eps2: f64,

    /// Open the trajectory playback window after the run
    #[arg(long)]
    viz: bool,

    /// Run the micro-benchmarks and exit
    #[arg(long)]
    bench: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IntegratorArg {
    Euler,
    Verlet,
}

impl From<IntegratorArg> for IntegratorConfig {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::Euler => IntegratorConfig::Euler,
            IntegratorArg::Verlet => IntegratorConfig::Verlet,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InitArg {
    Random,
    Orbital,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &PathBuf) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(scenario_cfg)
}

fn scenario_from_args(args: &Args) -> Result<ScenarioConfig> {
    let bodies = args.bodies.context("BODIES is required without --file")?;
    let steps = args.steps.context("STEPS is required without --file")?;

    let seed = match args.seed {
        Some(s) => s,
        None => {
            // Explicit clock-derived seed, surfaced so the run can be
            // repeated exactly
            let s = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
            println!("Seed: {s} (pass --seed {s} to reproduce this run)");
            s
        }
    };

    let init = match args.init {
        InitArg::Random => InitConfig::Random(RandomInitConfig {
            n: bodies,
            ..Default::default()
        }),
        InitArg::Orbital => InitConfig::Orbital(OrbitalInitConfig {
            n: bodies,
            ..Default::default()
        }),
    };

    Ok(ScenarioConfig {
        engine: EngineConfig {
            integrator: args.integrator.into(),
            record_trajectory: args.viz,
        },
        parameters: ParametersConfig {
            dt: args.dt,
            eps2: args.eps2,
            g: args.gravity,
            seed,
            steps,
        },
        init,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let mut scenario_cfg = match &args.file {
        Some(path) => load_scenario_from_yaml(path)?,
        None => scenario_from_args(&args)?,
    };
    if args.viz {
        scenario_cfg.engine.record_trajectory = true;
    }
    // The viewer renders the central body larger for orbital setups
    let central = match scenario_cfg.init {
        InitConfig::Orbital(_) => Some(0),
        _ => None,
    };

    let scenario = Scenario::build_scenario(scenario_cfg);
    let mut sim = Simulation::new(scenario);

    let elapsed = sim.run();
    println!("Simulation completed in {:.4} seconds", elapsed.as_secs_f64());

    for (i, b) in sim.system().bodies.iter().take(5).enumerate() {
        println!(
            "Body {i}: pos({:.2}, {:.2}) vel({:.2}, {:.2})",
            b.x.x, b.x.y, b.v.x, b.v.y
        );
    }

    if args.viz {
        let masses: Vec<f64> = sim.system().bodies.iter().map(|b| b.m).collect();
        match sim.into_trajectory() {
            Some(log) => run_playback(PlaybackScene::new(log, masses, central)),
            None => println!("no trajectory was recorded; nothing to play back"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert!(Args::try_parse_from(["gravsim"]).is_err());
    }

    #[test]
    fn malformed_body_count_is_rejected() {
        assert!(Args::try_parse_from(["gravsim", "ten", "100"]).is_err());
    }

    #[test]
    fn bodies_and_steps_parse() {
        let args = Args::try_parse_from(["gravsim", "4", "100"]).unwrap();
        assert_eq!(args.bodies, Some(4));
        assert_eq!(args.steps, Some(100));
    }

    #[test]
    fn scenario_file_makes_positionals_optional() {
        let args = Args::try_parse_from(["gravsim", "--file", "two_body.yaml"]).unwrap();
        assert!(args.bodies.is_none());
        assert!(args.file.is_some());
    }
}
