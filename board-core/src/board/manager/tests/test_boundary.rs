use super::*;

#[test]
fn test_zero_is_never_a_valid_order_number() {
    let (dir, mut manager) = create_test_manager();

    let err = manager.add_order(0).unwrap_err();
    assert!(matches!(err, BoardError::InvalidNumber));
    assert_eq!(err.severity(), Severity::Error);

    manager.add_order(5).unwrap();
    let err = manager.update_number(5, 0).unwrap_err();
    assert!(matches!(err, BoardError::InvalidNumber));

    assert_eq!(reload(&dir).preparing, vec![5]);
}

#[test]
fn test_rejected_operations_do_not_touch_storage() {
    let (dir, mut manager) = create_test_manager();

    let _ = manager.add_order(0);
    let _ = manager.move_to_ready(1);
    let _ = manager.delete_completed(1);
    let _ = manager.update_number(1, 2);

    // No mutation ever succeeded, so nothing was written
    assert!(!dir.path().join(BOARD_FILE).exists());
}

#[test]
fn test_save_failure_surfaces_as_storage_error() {
    // A path whose parent directory does not exist cannot be written
    let dir = TempDir::new().unwrap();
    let storage = BoardStorage::new(dir.path().join("missing").join(BOARD_FILE));
    let mut manager = BoardManager::with_storage(storage);

    let err = manager.add_order(5).unwrap_err();
    assert!(matches!(err, BoardError::Storage(StorageError::Io(_))));
    assert_eq!(err.severity(), Severity::Error);

    // The in-memory mutation stands; only persistence failed
    assert_eq!(manager.board().preparing, vec![5]);
}

#[test]
fn test_open_recovers_from_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE);
    std::fs::write(&path, "{{ not json").unwrap();

    let mut manager = BoardManager::open(&path);
    assert_eq!(*manager.board(), OrderBoard::default());

    // The next successful mutation replaces the malformed file
    manager.add_order(5).unwrap();
    assert_eq!(reload(&dir).preparing, vec![5]);
}

#[test]
fn test_open_discards_state_violating_invariants() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE);
    std::fs::write(&path, r#"{"PREPARING": [5], "READY": [5]}"#).unwrap();

    let manager = BoardManager::open(&path);
    assert_eq!(*manager.board(), OrderBoard::default());
}

#[test]
fn test_severity_classification() {
    let io_err = std::io::Error::other("disk gone");

    assert_eq!(BoardError::AlreadyPreparing(1).severity(), Severity::Warning);
    assert_eq!(BoardError::AlreadyReady(1).severity(), Severity::Error);
    assert_eq!(BoardError::NotPreparing(1).severity(), Severity::Error);
    assert_eq!(BoardError::NotReady(1).severity(), Severity::Error);
    assert_eq!(BoardError::InvalidNumber.severity(), Severity::Error);
    assert_eq!(
        BoardError::Storage(StorageError::Io(io_err)).severity(),
        Severity::Error
    );
}
