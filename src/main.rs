//! Headless runner: plays a scripted route through the simulation and prints a summary.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use maze_chase::config::SimConfig;
use maze_chase::constants::LOOP_TIME;
use maze_chase::events::RoundSignal;
use maze_chase::formatter::{self, CustomFormatter};
use maze_chase::game::Game;
use maze_chase::map::Direction;
use thousands::Separable;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// TOML file overriding the starting round, lives, intro length, seed or high score.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to simulate before stopping, unless the game ends first.
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Pace frames at 60 Hz instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// Directions fed to the player in turn, as letters U, L, D and R.
    #[arg(long, default_value = "LURDRULD")]
    route: String,
    /// Frames between two route inputs.
    #[arg(long, default_value_t = 45)]
    turn_interval: u64,
    /// Filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_route(route: &str) -> anyhow::Result<Vec<Direction>> {
    let directions = route
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::from_char(c).with_context(|| format!("invalid route letter {c:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if directions.is_empty() {
        bail!("route must contain at least one direction");
    }
    Ok(directions)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CustomFormatter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).context("could not install the tracing subscriber")?;

    let config = match &cli.config {
        Some(path) => SimConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::default(),
    };
    let route = parse_route(&cli.route)?;
    let turn_interval = cli.turn_interval.max(1);

    let mut game = Game::new(config).context("building the simulation")?;
    info!(frames = cli.frames, realtime = cli.realtime, "Simulation started");

    let mut frames_run: u64 = 0;
    let mut rounds_cleared: u32 = 0;
    for frame in 0..cli.frames {
        if frame % turn_interval == 0 {
            let direction = route[(frame / turn_interval) as usize % route.len()];
            game.set_desired_direction(direction);
        }

        let signal = game.update();
        formatter::advance_frame();
        frames_run += 1;

        for event in game.drain_events() {
            debug!(event = event.as_ref(), "Audio cue");
        }

        match signal {
            RoundSignal::Continue => {}
            RoundSignal::RoundComplete => rounds_cleared += 1,
            RoundSignal::GameOver => break,
        }

        if cli.realtime {
            spin_sleep::sleep(LOOP_TIME);
        }
    }

    let scoreboard = game.scoreboard();
    info!(
        frames = frames_run,
        rounds_cleared,
        game_over = game.is_over(),
        "Simulation finished"
    );
    println!(
        "score {} | high score {} | round {} | lives {} | frames {}",
        scoreboard.score().separate_with_commas(),
        scoreboard.high_score().separate_with_commas(),
        scoreboard.round(),
        scoreboard.lives().max(0),
        frames_run.separate_with_commas()
    );

    Ok(())
}
