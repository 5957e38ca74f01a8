use boxsim::{bench_update, Scenario, ScenarioConfig, Simulator};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless driver for the box N-body simulation")]
struct Args {
    /// Scenario YAML; relative paths resolve against the crate's scenarios/ directory
    #[arg(short, long, default_value = "three_bodies.yaml")]
    file: PathBuf,

    /// Override the number of steps from the scenario file
    #[arg(long)]
    steps: Option<usize>,

    /// Override the per-step delta (seconds) from the scenario file
    #[arg(long)]
    dt: Option<f64>,

    /// Time `update` for increasing body counts instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let path = if args.file.is_absolute() || args.file.exists() {
        args.file.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file)
    };

    let mut cfg = ScenarioConfig::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    if let Some(steps) = args.steps {
        cfg.run.steps = steps;
    }
    if let Some(dt) = args.dt {
        cfg.run.dt = dt;
    }
    Ok(cfg)
}

fn report(step: usize, sim: &Simulator) {
    for b in sim.bodies() {
        info!(
            "step {step:5} body {} ({}) x=[{:8.4} {:8.4} {:8.4}] v=[{:8.4} {:8.4} {:8.4}]",
            b.id(),
            b.color(),
            b.position().x,
            b.position().y,
            b.position().z,
            b.velocity().x,
            b.velocity().y,
            b.velocity().z,
        );
    }
    info!(
        "step {step:5} KE={:.6} |p|={:.6}",
        sim.total_kinetic_energy(),
        sim.total_momentum().norm()
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        bench_update()?;
        return Ok(());
    }

    let cfg = load_scenario(&args)?;
    let mut scenario = Scenario::build_scenario(cfg)?;
    info!(
        "running {} bodies for {} steps of {} s in a box of size {}",
        scenario.simulator.len(),
        scenario.run.steps,
        scenario.run.dt,
        scenario.simulator.params().box_size
    );

    report(0, &scenario.simulator);
    let every = scenario.run.log_every;
    scenario.run_with(|step, sim| {
        if every > 0 && step % every == 0 {
            report(step, sim);
        }
    })?;

    Ok(())
}
