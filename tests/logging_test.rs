use anyhow::Result;
use greet::app::{LoggingError, build_subscriber, create_log_file, setup_logging};
use greet::domain::Severity;
use regex::Regex;
use std::fs;
use tempfile::{NamedTempFile, TempDir};
use tracing::subscriber::with_default;

// Runs `f` under a scoped subscriber and returns what the file sink wrote.
fn capture_log<F: FnOnce()>(severity: Severity, f: F) -> Result<String> {
    let file = NamedTempFile::new()?;
    let subscriber = build_subscriber(severity, file.reopen()?);
    with_default(subscriber, f);
    Ok(fs::read_to_string(file.path())?)
}

#[test]
fn test_file_line_shape() -> Result<()> {
    let output = capture_log(Severity::Info, || {
        tracing::info!("Log something");
    })?;

    // [HH:MM:SS +ZZZZ]  INFO ThreadId(N) target: message
    let line = Regex::new(
        r"^\[\d{2}:\d{2}:\d{2} [+-]\d{4}\]\s+INFO\s+ThreadId\(\d+\)\s+logging_test:\s+Log something$",
    )?;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one log line");
    assert!(
        line.is_match(lines[0]),
        "line did not match expected shape: {:?}",
        lines[0]
    );

    Ok(())
}

#[test]
fn test_file_sink_has_no_ansi_escapes() -> Result<()> {
    let output = capture_log(Severity::Info, || {
        tracing::info!("Log something");
    })?;

    assert!(!output.contains('\u{1b}'));
    Ok(())
}

#[test]
fn test_threshold_suppresses_quieter_events() -> Result<()> {
    let output = capture_log(Severity::Warning, || {
        tracing::info!("should be dropped");
        tracing::debug!("should be dropped");
        tracing::warn!("should be kept");
    })?;

    assert!(!output.contains("should be dropped"));
    assert!(output.contains("should be kept"));
    assert_eq!(output.lines().count(), 1);
    Ok(())
}

#[test]
fn test_critical_threshold_admits_error_events() -> Result<()> {
    // Critical folds into ERROR at the tracing boundary, so error events
    // are the only ones the strictest threshold lets through.
    let output = capture_log(Severity::Critical, || {
        tracing::warn!("should be dropped");
        tracing::info!("should be dropped");
        tracing::error!("still visible");
    })?;

    assert!(!output.contains("should be dropped"));
    assert!(output.contains("still visible"));
    Ok(())
}

#[test]
fn test_trace_threshold_admits_everything() -> Result<()> {
    let output = capture_log(Severity::Trace, || {
        tracing::error!("e");
        tracing::warn!("w");
        tracing::info!("i");
        tracing::debug!("d");
        tracing::trace!("t");
    })?;

    assert_eq!(output.lines().count(), 5);
    Ok(())
}

#[test]
fn test_create_log_file_truncates_stale_content() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("app.log");

    fs::write(&path, "stale line from a previous run\n")?;
    let _file = create_log_file(&path)?;

    assert_eq!(fs::metadata(&path)?.len(), 0);
    Ok(())
}

#[test]
fn test_setup_logging_installs_global_subscriber() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("global.log");

    // The only global install in this test binary, so it must succeed.
    setup_logging(Severity::Info, &path)?;
    tracing::info!("Log something");

    let output = fs::read_to_string(&path)?;
    assert!(output.contains("Log something"));
    assert!(output.contains("INFO"));
    Ok(())
}

#[test]
fn test_setup_logging_reports_unwritable_path() {
    let result = setup_logging(Severity::Info, "/nonexistent-dir/greet/log.txt".as_ref());

    match result {
        Err(LoggingError::CreateFile { path, .. }) => {
            assert!(path.contains("/nonexistent-dir/greet/log.txt"));
        }
        other => panic!("expected CreateFile error, got {other:?}"),
    }
}
