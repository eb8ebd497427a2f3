use super::*;

// ========================================================================
// Counter flows chained across several operations
// ========================================================================

#[test]
fn test_single_order_lifecycle() {
    let (dir, mut manager) = create_test_manager();

    // New order arrives
    manager.add_order(5).unwrap();
    assert_eq!(manager.board().preparing, vec![5]);
    assert!(manager.board().ready.is_empty());

    // Same ticket entered twice
    let err = manager.add_order(5).unwrap_err();
    assert_eq!(err.severity(), Severity::Warning);
    assert_eq!(manager.board().preparing, vec![5]);

    // Kitchen finishes it
    manager.move_to_ready(5).unwrap();
    assert!(manager.board().preparing.is_empty());
    assert_eq!(manager.board().ready, vec![5]);

    // Re-adding while waiting for pickup is the harder conflict
    let err = manager.add_order(5).unwrap_err();
    assert!(matches!(err, BoardError::AlreadyReady(5)));
    assert_eq!(err.severity(), Severity::Error);
    assert_eq!(manager.board().ready, vec![5]);

    // Customer picks it up
    manager.delete_completed(5).unwrap();
    assert!(manager.board().preparing.is_empty());
    assert!(manager.board().ready.is_empty());

    assert_eq!(reload(&dir), OrderBoard::default());
}

#[test]
fn test_unordered_arrivals_then_sort() {
    let (_dir, mut manager) = create_test_manager();

    for n in [3, 1, 2] {
        manager.add_order(n).unwrap();
    }
    assert_eq!(manager.board().preparing, vec![3, 1, 2]);

    manager.sort_numbers().unwrap();
    assert_eq!(manager.board().preparing, vec![1, 2, 3]);
}

#[test]
fn test_busy_counter_afternoon() {
    let (_dir, mut manager) = create_test_manager();

    for n in [21, 8, 15, 3] {
        manager.add_order(n).unwrap();
    }
    manager.move_to_ready(8).unwrap();
    manager.move_to_ready(21).unwrap();

    // Ticket 15 was misread, actually 16
    manager.update_number(15, 16).unwrap();
    assert_eq!(manager.board().preparing, vec![3, 16]);
    assert_eq!(manager.board().ready, vec![8, 21]);

    manager.delete_completed(8).unwrap();
    manager.sort_numbers().unwrap();

    assert_eq!(manager.board().preparing, vec![3, 16]);
    assert_eq!(manager.board().ready, vec![21]);

    assert_eq!(manager.find_order(16), Some(Stage::Preparing));
    assert_eq!(manager.find_order(21), Some(Stage::Ready));
    assert_eq!(manager.find_order(8), None);
}

#[test]
fn test_every_mutation_is_persisted_immediately() {
    let (dir, mut manager) = create_test_manager();

    manager.add_order(5).unwrap();
    assert_eq!(reload(&dir), *manager.board());

    manager.add_order(12).unwrap();
    assert_eq!(reload(&dir), *manager.board());

    manager.move_to_ready(5).unwrap();
    assert_eq!(reload(&dir), *manager.board());

    manager.update_number(12, 13).unwrap();
    assert_eq!(reload(&dir), *manager.board());

    manager.sort_numbers().unwrap();
    assert_eq!(reload(&dir), *manager.board());

    manager.delete_completed(5).unwrap();
    assert_eq!(reload(&dir), *manager.board());
}

#[test]
fn test_board_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE);

    {
        let mut manager = BoardManager::open(&path);
        for n in [5, 12, 7] {
            manager.add_order(n).unwrap();
        }
        manager.move_to_ready(12).unwrap();
    }

    let manager = BoardManager::open(&path);
    assert_eq!(manager.board().preparing, vec![5, 7]);
    assert_eq!(manager.board().ready, vec![12]);
}
