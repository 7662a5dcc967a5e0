//! Session transcript: an append-only log file of commands and output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while managing the transcript file.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Could not start logging to file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to log file")]
    Write(#[source] std::io::Error),

    #[error("Could not stop logging")]
    Close(#[source] std::io::Error),
}

struct ActiveLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Append-only transcript of a session.
///
/// Inactive until [`Transcript::start`] is called. Every recorded line is
/// flushed immediately so the file stays current if the process dies.
#[derive(Default)]
pub struct Transcript {
    active: Option<ActiveLog>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start logging to `path`, truncating it. An active log is closed first.
    pub fn start(&mut self, path: &Path) -> Result<(), TranscriptError> {
        if self.is_active() {
            self.stop()?;
        }
        let file = File::create(path).map_err(|source| TranscriptError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "transcript started");
        self.active = Some(ActiveLog {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        });
        Ok(())
    }

    /// Stop logging. Returns whether a log was active.
    pub fn stop(&mut self) -> Result<bool, TranscriptError> {
        let Some(mut log) = self.active.take() else {
            return Ok(false);
        };
        log.writer.flush().map_err(TranscriptError::Close)?;
        info!(path = %log.path.display(), "transcript stopped");
        Ok(true)
    }

    /// Append one line. Does nothing while inactive.
    pub fn record(&mut self, line: &str) -> Result<(), TranscriptError> {
        let Some(log) = self.active.as_mut() else {
            return Ok(());
        };
        writeln!(log.writer, "{line}")
            .and_then(|()| log.writer.flush())
            .map_err(|e| {
                warn!(path = %log.path.display(), error = %e, "transcript write failed");
                TranscriptError::Write(e)
            })
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.active.as_ref().map(|log| log.path.as_path())
    }
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("path", &self.path())
            .finish()
    }
}
