//! Integration tests for the persisted log layout: file naming, line
//! format, and configuration-driven decoration.

mod common;

use std::fs;
use std::path::Path;

use common::{captured_registry, read_single_log, test_config};

/// Returns the file name of the single log under `dir`.
fn single_log_name(dir: &Path) -> String {
    let mut entries = fs::read_dir(dir)
        .expect("log dir readable")
        .collect::<Result<Vec<_>, _>>()
        .expect("dir entries");
    assert_eq!(entries.len(), 1);
    entries
        .remove(0)
        .file_name()
        .into_string()
        .expect("utf-8 file name")
}

// ============================================================================
// File Naming
// ============================================================================

/// Log files are named `{base}_{timestamp}.log` per logger.
#[test]
fn log_files_carry_base_name_and_timestamp() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut registry, _console) = captured_registry(test_config(dir.path()));
    registry.bug("hello", "debug", false).expect("dispatch succeeds");
    registry.bug("hello", "track", false).expect("dispatch succeeds");

    let debug_name = single_log_name(&dir.path().join("debug"));
    assert!(debug_name.starts_with("debug_"));
    assert!(debug_name.ends_with(".log"));
    // debug_YYYYMMDD_HHMMSS.log with the default format
    assert_eq!(debug_name.len(), "debug_".len() + 15 + ".log".len());

    let track_name = single_log_name(&dir.path().join("tracking"));
    assert!(track_name.starts_with("track_"));
    assert!(track_name.ends_with(".log"));
}

/// Renamed log bases flow into the file names.
#[test]
fn custom_base_names_are_respected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path());
    config.debug_log_name = "session".to_owned();
    config.tracking_log_name = "audit".to_owned();
    let (mut registry, _console) = captured_registry(config);
    registry.bug("hello", "debug", false).expect("dispatch succeeds");
    registry.bug("hello", "track", false).expect("dispatch succeeds");

    assert!(single_log_name(&dir.path().join("debug")).starts_with("session_"));
    assert!(single_log_name(&dir.path().join("tracking")).starts_with("audit_"));
}

// ============================================================================
// Line Format
// ============================================================================

/// File lines follow `{timestamp} - {LEVEL} - {message}` with the configured
/// timestamp format.
#[test]
fn file_lines_are_timestamped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut registry, _console) = captured_registry(test_config(dir.path()));

    registry
        .bug("Retrieving ROI List", "debug", false)
        .expect("dispatch succeeds");

    let debug_log = read_single_log(&dir.path().join("debug"));
    let line = debug_log.lines().next().expect("one line");
    let (stamp, rest) = line.split_once(" - ").expect("timestamp separator");

    // default format: YYYYMMDD_HHMMSS
    assert_eq!(stamp.len(), 15);
    assert_eq!(stamp.as_bytes()[8], b'_');
    assert!(stamp
        .chars()
        .enumerate()
        .all(|(i, ch)| if i == 8 { ch == '_' } else { ch.is_ascii_digit() }));
    assert_eq!(rest, "DEBUG - - Retrieving ROI List");
}

/// One configured timestamp format drives both the file name and line
/// prefix.
#[test]
fn timestamp_format_applies_to_names_and_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path());
    config.timestamp_format = "%Y".to_owned();
    let (mut registry, _console) = captured_registry(config);

    registry.bug("hello", "debug", false).expect("dispatch succeeds");

    let name = single_log_name(&dir.path().join("debug"));
    // debug_YYYY.log
    assert_eq!(name.len(), "debug_".len() + 4 + ".log".len());

    let debug_log = read_single_log(&dir.path().join("debug"));
    let line = debug_log.lines().next().expect("one line");
    let (stamp, _) = line.split_once(" - ").expect("timestamp separator");
    assert_eq!(stamp.len(), 4);
    assert!(stamp.chars().all(|ch| ch.is_ascii_digit()));
}

// ============================================================================
// Decoration Settings
// ============================================================================

/// Custom border and prefix settings flow through dispatch.
#[test]
fn custom_decoration_settings_apply() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path());
    config.title_border_char = '=';
    config.title_border_count = 3;
    config.message_prefix = ">>".to_owned();
    let (mut registry, console) = captured_registry(config);

    registry.bug("Phase One", "debug", true).expect("dispatch succeeds");
    registry.bug("step", "debug", false).expect("dispatch succeeds");

    assert_eq!(console.contents(), "DEBUG === Phase One ===\nDEBUG >> step\n");
}

// ============================================================================
// Writer Floors
// ============================================================================

/// Raising the file floor silences low-severity records in the file while
/// the console still shows them.
#[test]
fn file_floor_is_independent_of_console() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path());
    config.file_level = raybug_core::Severity::Warning;
    let (mut registry, console) = captured_registry(config);

    registry.bug("chatty", "debug", false).expect("dispatch succeeds");
    registry.bug("serious", "error", false).expect("dispatch succeeds");

    let console_text = console.contents();
    assert!(console_text.contains("DEBUG - chatty"));
    assert!(console_text.contains("ERROR - serious"));

    let debug_log = read_single_log(&dir.path().join("debug"));
    assert!(!debug_log.contains("chatty"));
    assert!(debug_log.contains("- ERROR - - serious"));
}

/// Raising the console floor silences low-severity records on the console
/// while the file still records them.
#[test]
fn console_floor_is_independent_of_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(dir.path());
    config.console_level = raybug_core::Severity::Error;
    let (mut registry, console) = captured_registry(config);

    registry.bug("chatty", "debug", false).expect("dispatch succeeds");
    registry.bug("mild", "warning", false).expect("dispatch succeeds");
    registry.bug("serious", "error", false).expect("dispatch succeeds");

    assert_eq!(console.contents(), "ERROR - serious\n");

    let debug_log = read_single_log(&dir.path().join("debug"));
    assert!(debug_log.contains("- DEBUG - - chatty"));
    assert!(debug_log.contains("- WARNING - - mild"));
}
