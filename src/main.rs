use sphere_sim::{Scenario, SimConfig};
use sphere_sim::run_viewer;
use sphere_sim::{bench_forces, bench_frame};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive gravity simulation of light-emitting and lit spheres")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Print force-pass and frame timings instead of opening a window
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(file_name: &str) -> Result<SimConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    SimConfig::from_yaml_file(&config_path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_frame();
        return Ok(());
    }

    let cfg = load_config(&args.file_name)?;
    let scenario = Scenario::build_scenario(&cfg).context("failed to place configured spheres")?;

    run_viewer(scenario, cfg.window.title.clone());

    Ok(())
}
