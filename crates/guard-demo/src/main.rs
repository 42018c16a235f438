//! Guard demo entry point.
//!
//! Ticks a guard behavior tree against a scripted intruder and logs what the
//! guard decides to do. Set `RUST_LOG=resumable_bt=trace` to see every node
//! transition.
mod config;
mod guard;

use anyhow::Result;
use clap::Parser;

use config::DemoConfig;
use guard::{Guard, RESPAWN_DISTANCE};

/// Distance the intruder drifts toward the guard per simulated second.
const INTRUDER_SPEED: f32 = 0.8;

#[derive(Parser, Debug)]
#[command(name = "guard-demo", about = "Tick a guard behavior tree")]
struct Cli {
    /// Number of ticks to run
    #[arg(long)]
    ticks: Option<u32>,

    /// Simulated seconds per tick
    #[arg(long)]
    delta: Option<f32>,

    /// Seed for the random taunt selector
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DemoConfig::from_env().with_overrides(cli.ticks, cli.delta, cli.seed);
    tracing::info!(?config, "starting guard demo");

    let mut tree = guard::build_tree(config.seed)?;
    let mut guard = Guard::new(config.delta);

    for tick in 0..config.ticks {
        tree.tick(&mut guard);

        // The intruder sneaks closer every tick, and a caught intruder has
        // already been respawned by the tree.
        guard.intruder_distance =
            (guard.intruder_distance - INTRUDER_SPEED * config.delta).max(0.0);
        if guard.intruder_distance == 0.0 {
            guard.intruder_distance = RESPAWN_DISTANCE;
        }

        tracing::debug!(
            tick,
            stamina = guard.stamina,
            distance = guard.intruder_distance,
            waypoint = guard.waypoint_name(),
            "tick complete"
        );
    }

    tracing::info!(
        ticks = config.ticks,
        catches = guard.catches,
        taunts = guard.taunts,
        stamina = guard.stamina,
        "guard demo finished"
    );

    Ok(())
}
