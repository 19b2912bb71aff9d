use anyhow::{Context, Result};
use clap::Parser;
use level_snake::game::GameConfig;
use level_snake::modes::HumanMode;
use level_snake::VERSION;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "level_snake")]
#[command(version = VERSION, about = "Snake with levels and lives, in the terminal")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level document (JSON)
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Board width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Board height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Grid cell size in pixels
    #[arg(long)]
    unit: Option<i32>,

    /// Where log output goes; the terminal is taken by the game
    #[arg(long, default_value = "level_snake.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(levels) = &self.levels {
            config.levels_path = levels.clone();
        }
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(unit) = self.unit {
            config.unit_size = unit;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(path: &Path, debug: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;

    let log_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("level_snake={},warn", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file, cli.debug)?;
    info!("Starting Level Snake v{}", VERSION);

    let config = cli.game_config().context("Invalid configuration")?;

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    info!("Game session ended");
    Ok(())
}
