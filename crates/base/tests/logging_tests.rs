use base::logging::{FileLogger, StdoutLogger, format_record, init_file_logger};
use log::Log;
use std::fs;

fn record_args<'a>(args: std::fmt::Arguments<'a>) -> log::Record<'a> {
    log::RecordBuilder::new()
        .level(log::Level::Error)
        .target("test")
        .file(Some("session.rs"))
        .line(Some(100))
        .args(args)
        .build()
}

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    logger.log(&record_args(format_args!("stdout message")));
    logger.flush();
}

#[test]
fn test_format_record_layout() {
    let line = format_record(&record_args(format_args!("run failed")));
    assert!(line.ends_with("[ERROR] session.rs:100 - run failed"));
}

#[test]
fn test_file_logger_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let logger = FileLogger::new(dir.path()).unwrap();

    logger.log(&record_args(format_args!("test error message")));
    logger.flush();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "Should have exactly one log file");

    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("[ERROR]"));
    assert!(content.contains("session.rs:100"));
    assert!(content.contains("test error message"));
}

#[test]
fn test_file_logger_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("logs").join("label-image");
    let _logger = FileLogger::new(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    let result = init_file_logger("/proc/nonexistent/path", log::LevelFilter::Info);
    assert!(result.is_err());
}
