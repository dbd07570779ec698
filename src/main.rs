mod game;
mod term;

use std::{fs::File, path::PathBuf, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use wrapsnake::{Cell, Engine, EngineConfig, StartCell, StartDirection};

use game::{Flow, SnakeGame};
use term::TermManager;

/// Snake on a wrap-around grid, played in the terminal.
#[derive(Parser, Debug)]
#[command(name = "wrapsnake", version)]
struct Args {
    /// Grid width in cells [default: fill the terminal]
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells [default: fill the terminal]
    #[arg(long)]
    height: Option<u16>,

    /// Seed for food placement and random starts
    #[arg(long)]
    seed: Option<u64>,

    /// Start column [default: grid center]
    #[arg(long, requires = "start_row")]
    start_col: Option<u16>,

    /// Start row [default: grid center]
    #[arg(long, requires = "start_col")]
    start_row: Option<u16>,

    /// Start every run on a random cell
    #[arg(long, conflicts_with_all = ["start_col", "start_row"])]
    random_start: bool,

    /// Start every run heading a random way instead of right
    #[arg(long)]
    random_direction: bool,

    /// Milliseconds per horizontal step
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    #[arg(long, default_value = "wrapsnake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    /// Builds the engine configuration for a terminal of `term_size`.
    fn engine_config(&self, term_size: (u16, u16)) -> Result<EngineConfig> {
        // One column and one row on each side go to the border
        let max_width = term_size.0.saturating_sub(2);
        let max_height = term_size.1.saturating_sub(2);
        let width = self.width.unwrap_or(max_width);
        let height = self.height.unwrap_or(max_height);

        if width > max_width || height > max_height {
            bail!("a {}x{} grid does not fit a {}x{} terminal", width, height, term_size.0, term_size.1);
        }

        let start_cell = match (self.random_start, self.start_col, self.start_row) {
            (true, _, _) => StartCell::Random,
            (false, Some(col), Some(row)) => StartCell::At(Cell::new(col, row)),
            _ => StartCell::Center,
        };
        let start_direction = if self.random_direction {
            StartDirection::Random
        } else {
            EngineConfig::default().start_direction
        };

        let mut config = EngineConfig::new(width, height)
            .with_start_cell(start_cell)
            .with_start_direction(start_direction);
        config.seed = self.seed;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout is the game board, so logs go to a file
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level.into(), Config::default(), log_file)
        .map_err(|e| anyhow!("cannot install logger: {}", e))?;

    let mut term = TermManager::new().context("cannot read terminal size")?;
    let config = args.engine_config(term.get_terminal_size())?;
    info!("starting with {:?}", config);
    let engine = Engine::new(config).context("invalid game configuration")?;

    term.setup().context("cannot prepare terminal")?;
    let mut game = SnakeGame::new(engine, term, Duration::from_millis(args.tick_ms));

    let result = match game.show_intro() {
        Ok(Flow::Continue) => game.play(),
        other => other.map(|_| ()),
    };

    // The terminal is given back even when the game loop failed
    game.shutdown()?;
    info!("bye");
    result
}
