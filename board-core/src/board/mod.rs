//! Pickup Board Module
//!
//! This module implements the order board for a fast-food counter:
//!
//! - **types**: The board itself, two ordered lists of order numbers
//! - **storage**: Flat-file JSON persistence with silent recovery
//! - **manager**: Mutating operations, conflict checks, severities
//!
//! # Data Flow
//!
//! ```text
//! Key Action → BoardManager → mutate OrderBoard → BoardStorage.save
//!                   ↓                                    ↓
//!              Ok / BoardError                     orders.json
//! ```
//!
//! Every mutation persists the whole board before returning. The board is
//! loaded once at startup; unreadable state loads as an empty board and is
//! never surfaced as an error.

pub mod manager;
pub mod storage;
pub mod types;

// Re-exports
pub use manager::{BoardError, BoardManager, BoardResult, Severity};
pub use storage::{BoardStorage, StorageError, StorageResult};
pub use types::{OrderBoard, Stage};
