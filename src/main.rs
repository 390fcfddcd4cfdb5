//! Farben headless runner
//!
//! Drives the simulation with the autopilot and reports how the game went.
//! Usage: `farben [CONFIG.json] [--frames N] [--json]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use farben::sim::GameEvent;
use farben::{Autopilot, GameConfig, GameLoop};

/// Roughly ten minutes at 60 Hz
const DEFAULT_FRAMES: u64 = 36_000;

#[derive(Parser, Debug)]
#[command(name = "farben", about = "Play Farben headless with the autopilot")]
struct Args {
    /// JSON config file; missing fields fall back to the defaults
    config: Option<PathBuf>,

    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u64,

    /// Print the final scene as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// "N Farben", or "1 Farbe"
fn score_label(bricks: usize) -> String {
    format!("{bricks} Farbe{}", if bricks == 1 { "" } else { "n" })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    };
    let mut game = match config.and_then(GameLoop::new) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Farben (headless) starting, up to {} frames", args.frames);

    let pilot = Autopilot::default();
    let mut lives_lost = 0u32;
    let mut bricks_destroyed = 0u32;
    let mut frames = 0u64;

    while frames < args.frames && game.state().is_alive() {
        frames += game.run(|state| pilot.input_for(state), 1);
        for event in game.state().events() {
            match event {
                GameEvent::LifeLost { .. } => lives_lost += 1,
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                _ => {}
            }
        }
        if frames % 3600 == 0 {
            log::info!(
                "frame {frames}: {}, {} lives",
                score_label(game.state().score()),
                game.state().lives().max(0)
            );
        }
    }

    let state = game.state();
    if args.json {
        match serde_json::to_string_pretty(&state.scene()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", score_label(state.score()));
        println!("frames:           {frames}");
        println!("bricks destroyed: {bricks_destroyed}");
        println!("lives lost:       {lives_lost}");
        println!("phase:            {:?}", state.phase());
    }

    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; a browser host drives `GameLoop` directly
}
