use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the terminal frontend.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot open {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("cannot encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
