use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use torus_snake::config::FRAME_POLL_MS;
use torus_snake::error::AppError;
use torus_snake::game::GameSession;
use torus_snake::input::GameInput;
use torus_snake::keys::InputHandler;
use torus_snake::scheduler::TickScheduler;
use torus_snake::snapshot_feed::SnapshotWriter;
use torus_snake::terminal_runtime::{TerminalSession, install_panic_hook};

type SnapshotFeed = SnapshotWriter<BufWriter<File>>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed food placement for a reproducible board.
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output to this file.
    #[arg(long = "log-file", value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log verbosity, used together with --log-file.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Write every distinct session snapshot to this file as JSON lines.
    #[arg(long, value_name = "FILE")]
    snapshots: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    install_panic_hook();

    let mut session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(seed),
        None => GameSession::new(),
    };
    let mut feed = cli
        .snapshots
        .as_deref()
        .map(SnapshotFeed::create)
        .transpose()?;

    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal, &mut session, &mut feed)?;
    drop(terminal);

    if let Some(feed) = feed.as_mut() {
        feed.flush()?;
    }
    info!("exiting, high score {}", session.world.high_score);
    Ok(())
}

// Stderr belongs to the alternate screen, so logging is file-only.
fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let Some(path) = cli.log_file.as_deref() else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(cli.log_level.into(), Config::default(), file)?;
    Ok(())
}

fn run(
    terminal: &mut TerminalSession,
    session: &mut GameSession,
    feed: &mut Option<SnapshotFeed>,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut scheduler = TickScheduler::new(Instant::now());
    let frame_budget = Duration::from_millis(FRAME_POLL_MS);

    loop {
        let snapshot = session.snapshot();
        if let Some(feed) = feed.as_mut() {
            feed.record(&snapshot)?;
        }
        terminal.draw(&snapshot, session.bounds())?;

        let timeout = scheduler
            .time_until_due(Instant::now(), session.tick_interval())
            .min(frame_budget);
        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }
            session.apply_input(game_input);
        }

        let now = Instant::now();
        if !session.is_running() {
            // Resuming waits a full interval instead of firing a catch-up tick.
            scheduler.mark(now);
            continue;
        }

        if scheduler.is_due(now, session.tick_interval()) {
            session.step();
            scheduler.mark(now);
        }
    }

    Ok(())
}
