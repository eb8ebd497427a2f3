use super::*;
use crate::board::storage::{BoardStorage, StorageError};
use crate::board::types::{OrderBoard, Stage};
use tempfile::TempDir;

const BOARD_FILE: &str = "orders.json";

/// Manager over a fresh temp directory; the dir must outlive the test
fn create_test_manager() -> (TempDir, BoardManager) {
    let dir = TempDir::new().unwrap();
    let storage = BoardStorage::new(dir.path().join(BOARD_FILE));
    let manager = BoardManager::with_storage(storage);
    (dir, manager)
}

/// Read the persisted board back through independent storage
fn reload(dir: &TempDir) -> OrderBoard {
    BoardStorage::new(dir.path().join(BOARD_FILE)).load()
}

/// Sorted union of both lists, for membership-preservation checks
fn number_set(board: &OrderBoard) -> Vec<u32> {
    let mut all: Vec<u32> = board
        .preparing
        .iter()
        .chain(board.ready.iter())
        .copied()
        .collect();
    all.sort_unstable();
    all
}

mod test_boundary;
mod test_flows;
