use sidenote_core::{init_logging, logging_status, LoggingError, NoteStore};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let first = first_dir.path().join("logs");
    let first_str = first.to_str().unwrap();
    let second_str = second_dir.path().to_str().unwrap();

    init_logging("info", first_str).unwrap();
    init_logging("INFO", first_str).unwrap();
    assert!(first.is_dir());

    let level_err = init_logging("debug", first_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::AlreadyInitialized { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", second_str).unwrap_err();
    assert!(dir_err.to_string().contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, first);

    // Store events go through the active logger without leaking text.
    let mut store = NoteStore::new();
    let id = store.create();
    let _ = store.delete(id);
}

#[test]
fn init_logging_rejects_bad_arguments_before_touching_state() {
    assert!(matches!(
        init_logging("verbose", "/tmp/sidenote"),
        Err(LoggingError::UnsupportedLevel(_))
    ));
    assert!(matches!(
        init_logging("info", ""),
        Err(LoggingError::EmptyDir)
    ));
    assert!(matches!(
        init_logging("info", "relative/logs"),
        Err(LoggingError::RelativeDir(_))
    ));
}
