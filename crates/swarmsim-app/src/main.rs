//! Headless scenario runner.
//!
//! Applies a scenario against the built-in demo catalogue, runs it for
//! a fixed number of ticks, and prints the final snapshot as JSON.
//! Notable events are logged as they happen (RUST_LOG=info to see them).

mod demo;

use clap::{Parser, ValueEnum};
use log::info;

use swarmsim_core::commands::ScenarioConfig;
use swarmsim_core::enums::BehaviorMode;
use swarmsim_core::events::SimEvent;
use swarmsim_sim::ScenarioEngine;

#[derive(Parser)]
#[command(name = "swarmsim", about = "Headless drone swarm scenario runner")]
struct Args {
    /// RNG seed; the same seed reproduces the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of simulation ticks to run (30 per second).
    #[arg(long, default_value_t = 1800)]
    ticks: u32,

    /// Requested total agent count.
    #[arg(long, default_value_t = 4)]
    total: u32,

    /// Requested copter count.
    #[arg(long, default_value_t = 2)]
    copters: u32,

    /// Requested wing count.
    #[arg(long, default_value_t = 2)]
    wings: u32,

    /// Behavior mix.
    #[arg(long, value_enum, default_value_t = Mode::Alternating)]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Recon,
    Attack,
    Alternating,
}

impl From<Mode> for BehaviorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Recon => BehaviorMode::AllRecon,
            Mode::Attack => BehaviorMode::AllAttack,
            Mode::Alternating => BehaviorMode::Alternating,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut engine = ScenarioEngine::new(demo::engine_config(args.seed));
    engine.apply_settings(ScenarioConfig {
        total: args.total,
        copters: args.copters,
        wings: args.wings,
        mode: args.mode.into(),
    });

    let mut last = swarmsim_core::state::ScenarioSnapshot::default();
    for _ in 0..args.ticks {
        last = engine.tick();
        for event in &last.events {
            match event {
                SimEvent::BombDropped { position } => {
                    info!("tick {}: ordnance released at {position}", last.time.tick);
                }
                SimEvent::Detonation { position } => {
                    info!("tick {}: detonation at {position}", last.time.tick);
                }
                _ => {}
            }
        }
    }

    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize snapshot: {err}"),
    }
}
