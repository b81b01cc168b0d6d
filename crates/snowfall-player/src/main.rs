//! Snowfall - falling snowflakes in a window
//!
//! Usage:
//!   snowfall [play] [--config <file.toml>] [--width N] [--height N] [--seed N] [--count N]
//!   snowfall render [--output <file.png>] [--ticks N]

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{play, render};
use snowfall_player::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snowfall")]
#[command(about = "Falling snowflakes sharing flyweight descriptors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Window or image width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Window or image height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Fixed random seed for a reproducible snowfall
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Number of snowflakes
    #[arg(long, global = true)]
    count: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the animation window (default)
    Play,

    /// Simulate headlessly and write one frame to a PNG image
    Render {
        /// Output image path
        #[arg(short, long, default_value = "snowfall.png")]
        output: String,

        /// Update steps to run before capturing
        #[arg(long, default_value = "120")]
        ticks: u32,
    },
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load config from {path}"))?,
            None => AppConfig::default(),
        };

        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(count) = self.count {
            config.snowfall.count = count;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.app_config()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play::run(play::PlayArgs { config }),
        Commands::Render { output, ticks } => render::run(render::RenderArgs {
            config,
            output,
            ticks,
        }),
    }
}
