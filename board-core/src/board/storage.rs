//! Flat-file JSON storage for the pickup board
//!
//! # Document Layout
//!
//! A single JSON object with exactly two fields:
//!
//! | Field | Value | Purpose |
//! |-------|-------|---------|
//! | `PREPARING` | `[u32, ...]` | Orders being prepared, arrival order |
//! | `READY` | `[u32, ...]` | Orders awaiting pickup, promotion order |
//!
//! # Recovery
//!
//! The read path never fails: a missing, empty, or malformed document, or
//! one that violates the board invariants, loads as an empty board. The
//! cause is logged and the process continues.
//!
//! # Durability
//!
//! `save` overwrites the document in place. The board assumes it is the
//! sole owner of the file for the life of the process; there is no lock
//! and no partial-write protection.

use crate::board::types::OrderBoard;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage errors (write path only; the read path recovers silently)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Board storage backed by a single JSON document
#[derive(Debug, Clone)]
pub struct BoardStorage {
    path: PathBuf,
}

impl BoardStorage {
    /// Bind storage to the given path without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========== Load ==========

    /// Load the persisted board.
    ///
    /// Missing file, empty file, malformed content, and invariant
    /// violations (duplicates, overlap between lists, zero) all yield an
    /// empty board. A well-formed document is returned verbatim, element
    /// order included.
    pub fn load(&self) -> OrderBoard {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Board file absent, starting empty");
                return OrderBoard::default();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Board file unreadable, starting empty"
                );
                return OrderBoard::default();
            }
        };

        if raw.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "Board file empty, starting empty");
            return OrderBoard::default();
        }

        match serde_json::from_str::<OrderBoard>(&raw) {
            Ok(board) if board.is_well_formed() => board,
            Ok(_) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Board file violates board invariants, starting empty"
                );
                OrderBoard::default()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Board file malformed, starting empty"
                );
                OrderBoard::default()
            }
        }
    }

    // ========== Save ==========

    /// Persist the whole board, overwriting the document in place
    pub fn save(&self, board: &OrderBoard) -> StorageResult<()> {
        let json = serde_json::to_string(board)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
