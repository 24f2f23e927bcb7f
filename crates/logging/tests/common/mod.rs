//! Shared helpers for the integration suites: a capturable console writer
//! and scratch-directory configuration.

#![allow(dead_code)]

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use raybug_logging::{LogConfig, LogRegistry};

/// An `io::Write` backed by a shared buffer, standing in for the console.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    /// Returns everything written so far as UTF-8 text.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A default configuration pointed at scratch subdirectories of `dir`.
pub fn test_config(dir: &Path) -> LogConfig {
    LogConfig {
        debug_log_dir: dir.join("debug"),
        tracking_log_dir: dir.join("tracking"),
        ..LogConfig::default()
    }
}

/// A registry over `config` whose console output lands in the returned
/// buffer.
pub fn captured_registry(config: LogConfig) -> (LogRegistry, SharedBuf) {
    let console = SharedBuf::default();
    let registry = LogRegistry::with_console_writer(config, Box::new(console.clone()))
        .expect("registry comes up");
    (registry, console)
}

/// Reads the single log file expected under `dir`.
pub fn read_single_log(dir: &Path) -> String {
    let mut entries = fs::read_dir(dir)
        .expect("log dir readable")
        .collect::<Result<Vec<_>, _>>()
        .expect("dir entries");
    assert_eq!(entries.len(), 1, "expected exactly one log file in {}", dir.display());
    fs::read_to_string(entries.remove(0).path()).expect("log file readable")
}

/// Concatenates every log file under `dir` (used after re-initialization,
/// which may roll to a new timestamped name).
pub fn read_all_logs(dir: &Path) -> String {
    let mut combined = String::new();
    for entry in fs::read_dir(dir).expect("log dir readable") {
        let entry = entry.expect("dir entry");
        combined.push_str(&fs::read_to_string(entry.path()).expect("log file readable"));
    }
    combined
}
