use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::AppError;
use crate::game::Snapshot;

/// Streams distinct snapshots as JSON lines.
///
/// Consecutive identical snapshots are written once.
#[derive(Debug)]
pub struct SnapshotWriter<W: Write> {
    out: W,
    last: Option<Snapshot>,
}

impl SnapshotWriter<BufWriter<File>> {
    /// Creates (or truncates) `path` as the feed target.
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let file = File::create(path).map_err(|source| AppError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Writes `snapshot` unless it equals the previous one.
    ///
    /// Returns whether a line was written.
    pub fn record(&mut self, snapshot: &Snapshot) -> Result<bool, AppError> {
        if self.last.as_ref() == Some(snapshot) {
            return Ok(false);
        }

        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.last = Some(snapshot.clone());
        Ok(true)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
