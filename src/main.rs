use orbsim::{total_energy, total_momentum, Mode, Preset, ScenarioConfig, FRAME_PERIOD};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver for the orbital simulation core.
///
/// Stands in for the UI's animation loop: picks a scenario, plays the clock,
/// feeds synthetic 60 Hz wall-time ticks, and reports energy and momentum
/// drift at the end.
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML file under scenarios/ (overrides --preset)
    #[arg(short, long)]
    file_name: Option<String>,

    /// Built-in scenario
    #[arg(short, long, value_enum, default_value = "sun-earth")]
    preset: Preset,

    /// Simulated days to run
    #[arg(short, long, default_value_t = 365.0)]
    days: f64,

    /// Run without gravity (bodies coast in straight lines)
    #[arg(long)]
    no_gravity: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => args.preset.config(),
    };

    let mut mode = Mode::from_config(cfg)?;
    mode.set_gravity_enabled(!args.no_gravity);

    let g = mode.parameters().effective_g();
    let energy_start = total_energy(mode.bodies(), g);
    let momentum_start = total_momentum(mode.bodies());

    let target = args.days * 86_400.0;
    mode.clock_mut().play();
    while mode.clock().simulation_time() < target {
        mode.tick(FRAME_PERIOD);
    }
    mode.clock_mut().pause();

    let energy_end = total_energy(mode.bodies(), g);
    let momentum_end = total_momentum(mode.bodies());

    println!(
        "{}: {:.1} simulated days ({} rewindable steps)",
        mode.name(),
        mode.clock().simulation_time() / 86_400.0,
        mode.bodies().first().map_or(0, |b| b.history_len()),
    );
    for body in mode.bodies() {
        let s = body.current_state();
        println!(
            "  {:14} pos = ({:+12.4e}, {:+12.4e}) m, |v| = {:9.1} m/s{}",
            body.name,
            s.position.x,
            s.position.y,
            s.velocity.norm(),
            if s.exploded { "  [exploded]" } else { "" },
        );
    }
    if energy_start != 0.0 {
        println!(
            "  energy drift   {:+.3e} ({:.4}%)",
            energy_end - energy_start,
            100.0 * (energy_end - energy_start).abs() / energy_start.abs(),
        );
    }
    println!(
        "  momentum drift {:+.3e} kg m/s",
        (momentum_end - momentum_start).norm()
    );

    Ok(())
}
