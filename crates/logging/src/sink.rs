//! crates/logging/src/sink.rs
//! Output sinks: one writer, one threshold, one line format.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::mem;
use std::path::Path;

use raybug_core::timestamp::format_epoch;
use raybug_core::{Record, Severity};

use crate::config::FileMode;

/// What kind of target a sink writes to.
///
/// Dispatch skips console-kind sinks when a debug-level message is not
/// console-visible; the file/console distinction is behavioral, not just
/// descriptive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SinkKind {
    /// A log file opened at logger construction.
    File,
    /// The process console (standard output).
    Console,
}

/// Line format a sink renders records with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SinkFormat {
    /// `{timestamp} - {LEVEL} - {message}` — the file-writer format. The
    /// timestamp expands the embedded strftime-style format string.
    Timestamped {
        /// Format string for the leading timestamp.
        format: String,
    },
    /// `{LEVEL} {message}` — the console-writer format.
    Bare,
}

/// A single output target attached to a logger.
///
/// Each sink owns its writer, carries its own minimum severity, and renders
/// records with its own format. A sink's floor is independent of its
/// logger's floor; a record must clear both to be emitted here.
pub struct LogSink {
    target: Box<dyn Write + Send>,
    kind: SinkKind,
    threshold: Severity,
    format: SinkFormat,
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("kind", &self.kind)
            .field("threshold", &self.threshold)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl LogSink {
    /// Opens a file sink at `path` using the configured open mode.
    ///
    /// The file handle stays open for the sink's lifetime; there is no
    /// per-call open/close.
    pub fn file(
        path: &Path,
        mode: FileMode,
        threshold: Severity,
        timestamp_format: &str,
    ) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        match mode {
            FileMode::Truncate => {
                options.write(true).create(true).truncate(true);
            }
            FileMode::Append => {
                options.append(true).create(true);
            }
        }
        let file = options.open(path)?;
        Ok(Self {
            target: Box::new(file),
            kind: SinkKind::File,
            threshold,
            format: SinkFormat::Timestamped {
                format: timestamp_format.to_owned(),
            },
        })
    }

    /// Creates a console sink writing to standard output.
    #[must_use]
    pub fn console(threshold: Severity) -> Self {
        Self {
            target: Box::new(io::stdout()),
            kind: SinkKind::Console,
            threshold,
            format: SinkFormat::Bare,
        }
    }

    /// Creates a sink over an arbitrary writer.
    ///
    /// Used by tests to capture console output and by embedders routing logs
    /// somewhere the stock constructors do not cover.
    #[must_use]
    pub fn from_writer(
        target: Box<dyn Write + Send>,
        kind: SinkKind,
        threshold: Severity,
        format: SinkFormat,
    ) -> Self {
        Self {
            target,
            kind,
            threshold,
            format,
        }
    }

    /// Returns the sink's kind.
    #[must_use]
    pub const fn kind(&self) -> SinkKind {
        self.kind
    }

    /// Returns the sink's own minimum severity.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Replaces the underlying writer, returning the previous one.
    ///
    /// The sink's kind, threshold, and format are preserved; only the target
    /// changes. The returned writer still holds anything written so far.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_target(&mut self, mut target: Box<dyn Write + Send>) -> Box<dyn Write + Send> {
        mem::swap(&mut self.target, &mut target);
        target
    }

    /// Renders and writes a record if it clears this sink's floor.
    ///
    /// The line is flushed immediately so a crash mid-script loses at most
    /// the record being written.
    pub fn write_record(&mut self, record: &Record<'_>) -> io::Result<()> {
        if !record.severity.passes(self.threshold) {
            return Ok(());
        }
        let line = match &self.format {
            SinkFormat::Timestamped { format } => format!(
                "{} - {} - {}\n",
                format_epoch(record.epoch_secs, format),
                record.severity.as_str(),
                record.text
            ),
            SinkFormat::Bare => format!("{} {}\n", record.severity.as_str(), record.text),
        };
        self.target.write_all(line.as_bytes())?;
        self.target.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}
