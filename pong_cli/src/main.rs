//! Headless Pong: the autopilot plays the left paddle against the tracking
//! paddle on the right, printing the scoreboard as it changes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use game_core::{Config, GameRng, MatchController, MatchLength};
use pong_cli::{run, LogAudio, RunOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pong")]
#[command(about = "Play Pong against a tracking paddle, headless", long_about = None)]
struct Cli {
    /// Match length: 3, 5 or 7 (defaults to the configured win score)
    #[arg(long)]
    best_of: Option<MatchLength>,

    /// Seed for serve directions (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding tuning values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of matches to play back to back
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Abandon a match after this many ticks
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,

    /// Run at 60 frames per second and pause after each match
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(length) = cli.best_of {
        config.win_score = length.win_threshold();
        info!(%length, win_score = config.win_score, "match length");
    }

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let options = RunOptions {
        matches: cli.matches,
        replay_threshold: config.win_score,
        max_ticks: cli.max_ticks,
        realtime: cli.realtime,
    };

    let mut controller = MatchController::new(config, rng).context("invalid configuration")?;
    let mut audio = LogAudio::new();
    let stdout = io::stdout();
    let reports = run(&mut controller, &options, &mut audio, &mut stdout.lock())?;

    for (i, report) in reports.iter().enumerate() {
        info!(
            round = i + 1,
            winner = ?report.winner,
            player = report.score.player,
            ai = report.score.ai,
            ticks = report.ticks,
            "match finished"
        );
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&controller.snapshot())?;
        println!("{json}");
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}
