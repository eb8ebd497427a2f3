//! BoardManager - every change to the pickup board goes through here
//!
//! This module handles:
//! - Membership and conflict checks with user-facing severities
//! - List mutations (add, move, delete, update, sort)
//! - Persistence of the whole board after every mutation
//!
//! # Operation Flow
//!
//! ```text
//! add_order(n) / move_to_ready(n) / ...
//!     ├─ 1. Validate the number, check both lists
//!     ├─ 2. Mutate the in-memory board
//!     ├─ 3. Save the whole board through storage
//!     └─ 4. Return Ok / BoardError (severity drives display)
//! ```
//!
//! Conflict checks look at READY before PREPARING: a READY conflict is
//! always the stronger signal and wins when both would apply.

mod error;
pub use error::*;

use super::storage::BoardStorage;
use super::types::{OrderBoard, Stage};
use std::path::PathBuf;

/// Board manager, the sole writer of the board
#[derive(Debug)]
pub struct BoardManager {
    storage: BoardStorage,
    board: OrderBoard,
}

impl BoardManager {
    /// Open the board at the given path, loading persisted state.
    /// Unreadable state loads as an empty board, never as an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let storage = BoardStorage::new(path);
        let board = storage.load();
        tracing::info!(
            path = %storage.path().display(),
            preparing = board.preparing.len(),
            ready = board.ready.len(),
            "Board loaded"
        );
        Self { storage, board }
    }

    /// Create a manager over existing storage (for testing)
    #[cfg(test)]
    pub fn with_storage(storage: BoardStorage) -> Self {
        let board = storage.load();
        Self { storage, board }
    }

    // ========== Queries ==========

    /// Current board state, for rendering
    pub fn board(&self) -> &OrderBoard {
        &self.board
    }

    /// Which list holds `number`, if any. Pure query, no mutation, no save.
    pub fn find_order(&self, number: u32) -> Option<Stage> {
        self.board.stage_of(number)
    }

    // ========== Mutations ==========

    /// Add a new order to the tail of PREPARING
    pub fn add_order(&mut self, number: u32) -> BoardResult<()> {
        Self::validate_number(number)?;
        self.ensure_absent(number)?;

        self.board.preparing.push(number);
        self.persist()?;
        tracing::info!(order = number, "Order added to PREPARING");
        Ok(())
    }

    /// Move an order from PREPARING to the tail of READY
    pub fn move_to_ready(&mut self, number: u32) -> BoardResult<()> {
        let idx = self
            .board
            .preparing
            .iter()
            .position(|&n| n == number)
            .ok_or(BoardError::NotPreparing(number))?;

        self.board.preparing.remove(idx);
        self.board.ready.push(number);
        self.persist()?;
        tracing::info!(order = number, "Order transferred to READY");
        Ok(())
    }

    /// Delete a picked-up order from READY
    pub fn delete_completed(&mut self, number: u32) -> BoardResult<()> {
        let idx = self
            .board
            .ready
            .iter()
            .position(|&n| n == number)
            .ok_or(BoardError::NotReady(number))?;

        self.board.ready.remove(idx);
        self.persist()?;
        tracing::info!(order = number, "Order deleted from READY");
        Ok(())
    }

    /// Replace an order number within PREPARING.
    ///
    /// The updated number joins the tail of the list; it does not keep the
    /// old number's position. Updating a number to itself reports the
    /// duplicate-in-PREPARING warning.
    pub fn update_number(&mut self, current: u32, new: u32) -> BoardResult<()> {
        Self::validate_number(new)?;
        let idx = self
            .board
            .preparing
            .iter()
            .position(|&n| n == current)
            .ok_or(BoardError::NotPreparing(current))?;
        self.ensure_absent(new)?;

        self.board.preparing.remove(idx);
        self.board.preparing.push(new);
        self.persist()?;
        tracing::info!(from = current, to = new, "Order number updated in PREPARING");
        Ok(())
    }

    /// Sort both lists ascending, independently
    pub fn sort_numbers(&mut self) -> BoardResult<()> {
        self.board.preparing.sort_unstable();
        self.board.ready.sort_unstable();
        self.persist()?;
        tracing::info!("PREPARING and READY lists sorted");
        Ok(())
    }

    // ========== Internal ==========

    /// READY is checked first: its conflict outranks the PREPARING one
    fn ensure_absent(&self, number: u32) -> BoardResult<()> {
        if self.board.ready.contains(&number) {
            return Err(BoardError::AlreadyReady(number));
        }
        if self.board.preparing.contains(&number) {
            return Err(BoardError::AlreadyPreparing(number));
        }
        Ok(())
    }

    fn validate_number(number: u32) -> BoardResult<()> {
        if number == 0 {
            return Err(BoardError::InvalidNumber);
        }
        Ok(())
    }

    /// Write the whole board through to storage. On failure the in-memory
    /// mutation stands and the caller sees a storage error.
    fn persist(&self) -> BoardResult<()> {
        self.storage.save(&self.board)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
