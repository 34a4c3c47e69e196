use softgrav::{ScenarioConfig, Scenario, BodyState, ShapeConfig};
use softgrav::bench_step;

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/`
    #[arg(short, default_value = "two_planets.yaml")]
    file_name: String,

    /// Override the number of steps of the run
    #[arg(long)]
    steps: Option<usize>,

    /// Time `simulate_step` for growing body counts instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Throw this many bodies from the camera before the run starts
    #[arg(long, default_value_t = 0)]
    throw: usize,

    /// Launch speed of thrown bodies
    #[arg(long, default_value_t = 3.0)]
    throw_speed: f64,
}

// thrown bodies cycle through cube, cylinder and cone
fn throw_shape(k: usize) -> ShapeConfig {
    match k % 3 {
        0 => ShapeConfig::Cube { half_extent: 0.1, samples: 5 },
        1 => ShapeConfig::Cylinder { radius: 0.1, half_length: 0.1, samples_around: 10, samples_along: 20 },
        _ => ShapeConfig::Cone { radius: 0.1, height: 0.2, samples_around: 16, samples_along: 8 },
    }
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("cannot open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("cannot parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn report(scenario: &Scenario, step: usize) {
    let Some(player) = scenario.player() else {
        return;
    };
    let speed = player.velocity.iter().map(|v| v.norm()).fold(0.0, f64::max);
    match player.state() {
        BodyState::Free => info!(
            step,
            t = scenario.t,
            com = ?player.com.as_slice(),
            max_speed = speed,
            "player free"
        ),
        BodyState::Captured(id) => info!(
            step,
            t = scenario.t,
            black_hole = id.0,
            elapsed = player.capture_elapsed,
            "player captured"
        ),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    for k in 0..args.throw {
        scenario.throw_body(&throw_shape(k), args.throw_speed)?;
    }
    let steps = args.steps.unwrap_or(scenario.engine.steps);
    let report_every = scenario.engine.report_every;

    info!(
        bodies = scenario.bodies.len(),
        planets = scenario.planets.len(),
        black_holes = scenario.black_holes.len(),
        steps,
        "starting headless run"
    );

    for step in 1..=steps {
        if !scenario.step()? {
            info!("time step below threshold, simulation paused");
            break;
        }
        if report_every > 0 && step % report_every == 0 {
            report(&scenario, step);
        }
    }

    let captured = scenario.bodies.iter().filter(|b| b.is_captured()).count();
    info!(t = scenario.t, captured, "run finished");

    Ok(())
}
