//! Snapshot persistence for automata.
//!
//! This module serializes a whole automaton to disk and reads it back,
//! either as compact binary (bincode) or as human-readable JSON. Writes go
//! to an anonymous temporary file in the same directory which is then
//! persisted over the target, so a failed save never leaves a half-written
//! snapshot behind.

use crate::core::Automaton;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// On-disk encoding of a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// bincode; the default for `.fsm` and unknown extensions
    Binary,
    /// pretty-printed JSON; used for `.json`
    Json,
}

impl SnapshotFormat {
    /// Pick a format from a file's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Binary,
        }
    }
}

/// Serializable checkpoint of an automaton definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The complete automaton definition
    pub automaton: Automaton,
}

impl Checkpoint {
    /// Capture a snapshot of `automaton`.
    pub fn capture(automaton: &Automaton) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            automaton: automaton.snapshot(),
        }
    }

    pub fn to_bytes(&self, format: SnapshotFormat) -> Result<Vec<u8>, CheckpointError> {
        match format {
            SnapshotFormat::Binary => bincode::serialize(self)
                .map_err(|e| CheckpointError::SerializationFailed(e.to_string())),
            SnapshotFormat::Json => serde_json::to_vec_pretty(self)
                .map_err(|e| CheckpointError::SerializationFailed(e.to_string())),
        }
    }

    /// Decode a checkpoint and reject versions this build does not understand.
    pub fn from_bytes(bytes: &[u8], format: SnapshotFormat) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint = match format {
            SnapshotFormat::Binary => bincode::deserialize(bytes)
                .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?,
            SnapshotFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?,
        };

        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(checkpoint)
    }
}

/// Write a checkpoint of `automaton` to `path`.
///
/// The checkpoint is fully encoded before anything touches the disk, then
/// written to an anonymous temp file beside `path`, synced, and persisted
/// over `path`. A failure at any step leaves `path` and its siblings as
/// they were.
pub fn save_checkpoint(
    path: &Path,
    automaton: &Automaton,
    format: SnapshotFormat,
) -> Result<Checkpoint, CheckpointError> {
    let checkpoint = Checkpoint::capture(automaton);
    let bytes = checkpoint.to_bytes(format)?;

    let io_err = |source: std::io::Error| CheckpointError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(parent_dir(path)).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|err| io_err(err.error))?;

    info!(path = %path.display(), id = %checkpoint.id, ?format, "checkpoint saved");
    Ok(checkpoint)
}

/// Read a checkpoint from `path`.
pub fn load_checkpoint(path: &Path, format: SnapshotFormat) -> Result<Checkpoint, CheckpointError> {
    let bytes = fs::read(path).map_err(|source| CheckpointError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let checkpoint = Checkpoint::from_bytes(&bytes, format)?;
    debug!(path = %path.display(), id = %checkpoint.id, "checkpoint loaded");
    Ok(checkpoint)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
