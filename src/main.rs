//! Orbit Reflex headless driver
//!
//! Runs a session without a drawing surface: an autopilot presses hit
//! whenever the shuttle is over the obstacle, frames advance at a fixed step,
//! and the final scoreboard is printed.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

use orbit_reflex::Game;
use orbit_reflex::input::InputEvent;
use orbit_reflex::render::{self, DrawCommand};
use orbit_reflex::sim::{AngleSource, GameEvent, GamePhase, SeededAngles, SystemAngles};
use orbit_reflex::tuning::Tuning;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Seed for obstacle placement (un-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Number of runs to play back to back
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// JSON tuning file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); defaults to RUST_LOG or info
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Print a JSON summary instead of the scoreboard
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    runs: Vec<RunSummary>,
    best: Option<u64>,
    final_frame: &'a [DrawCommand],
}

#[derive(Debug, Serialize)]
struct RunSummary {
    score: u64,
    hits: u32,
    elapsed: f32,
}

fn init_logging(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let tuning = match &args.config {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    match args.seed {
        Some(seed) => {
            log::info!("Seeded run: {seed}");
            let angles = SeededAngles::seeded(seed);
            let game = Game::with_angles(args.width, args.height, tuning, angles)?;
            play(game, args)
        }
        None => {
            let angles = SystemAngles::system();
            let game = Game::with_angles(args.width, args.height, tuning, angles)?;
            play(game, args)
        }
    }
}

fn play<A: AngleSource>(mut game: Game<A>, args: &Args) -> Result<(), Box<dyn Error>> {
    let mut runs = Vec::new();
    let mut frame = 0;

    game.apply_input(InputEvent::Hit);
    while frame < args.frames && (runs.len() as u32) < args.runs {
        match game.state.phase {
            GamePhase::Running if game.state.collision.collides => {
                game.apply_input(InputEvent::Hit)
            }
            GamePhase::GameOver => {
                // Back through Init into a fresh run
                game.apply_input(InputEvent::Hit);
                game.apply_input(InputEvent::Hit);
            }
            _ => {}
        }

        game.update(args.dt);
        frame += 1;

        for event in game.drain_events() {
            log::debug!("Frame {frame}: {event:?}");
            if let GameEvent::GameOver {
                score,
                hits,
                elapsed,
            } = event
            {
                runs.push(RunSummary {
                    score,
                    hits,
                    elapsed,
                });
            }
        }
    }

    if frame >= args.frames {
        log::warn!("Frame limit {} reached", args.frames);
    }

    let final_frame = render::frame(&game.state);
    if args.json {
        let summary = Summary {
            runs,
            best: game.high_scores.top_score(),
            final_frame: &final_frame,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for command in &final_frame {
            if let DrawCommand::Text { text, .. } = command {
                println!("{text}");
            }
        }
        for (rank, entry) in game.high_scores.entries.iter().enumerate() {
            println!(
                "#{:<2} {:>8}  {} hits  {:.1}s",
                rank + 1,
                orbit_reflex::sim::format_score(entry.score),
                entry.hits,
                entry.duration
            );
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);
    log::info!("Orbit Reflex (headless) starting...");

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
