//! crates/logging/src/logger.rs
//! Named loggers and the factory that wires their sinks.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use raybug_core::timestamp::{format_epoch, now_epoch_secs};
use raybug_core::{Record, Severity};

use crate::config::LogConfig;
use crate::error::SetupError;
use crate::sink::{LogSink, SinkKind};

/// A named sink collection with its own minimum severity.
///
/// Two loggers exist for the process lifetime (see
/// [`LogRegistry`](crate::LogRegistry)): the debug logger, file-backed with
/// an optional console sink, and the tracking logger, file-backed only.
/// Loggers are created through [`create`](Self::create) and re-wired through
/// [`attach_sinks`](Self::attach_sinks); both paths discard prior sinks
/// before attaching new ones, so repeated initialization never duplicates
/// output.
pub struct Logger {
    name: String,
    threshold: Severity,
    sinks: Vec<LogSink>,
    log_file: Option<PathBuf>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("sinks", &self.sinks.len())
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Logger {
    /// Creates a logger and attaches its sinks.
    ///
    /// Ensures `directory` exists (creating intermediate components as
    /// needed), computes the log file name as `{name}_{timestamp}.log` using
    /// the configured timestamp format, opens the file sink with the
    /// configured mode, and attaches a console sink iff `enable_console` is
    /// set. The logger's own floor is `Debug` when `min_severity_is_debug`
    /// is true, `Info` otherwise; per-sink floors come from the
    /// configuration and restrict further.
    pub fn create(
        name: &str,
        min_severity_is_debug: bool,
        enable_console: bool,
        directory: &Path,
        config: &LogConfig,
    ) -> Result<Self, SetupError> {
        let threshold = if min_severity_is_debug {
            Severity::Debug
        } else {
            Severity::Info
        };
        let mut logger = Self {
            name: name.to_owned(),
            threshold,
            sinks: Vec::new(),
            log_file: None,
        };
        logger.attach_sinks(directory, enable_console, config)?;
        Ok(logger)
    }

    /// Discards any attached sinks and wires a fresh file (and optionally
    /// console) sink.
    ///
    /// Dropping the old sinks closes their file handles. Re-invocation with
    /// the same name and directory is idempotent in the observable sense:
    /// a message logged afterwards produces exactly one file line and at
    /// most one console line.
    pub fn attach_sinks(
        &mut self,
        directory: &Path,
        enable_console: bool,
        config: &LogConfig,
    ) -> Result<(), SetupError> {
        self.sinks.clear();
        self.log_file = None;

        fs::create_dir_all(directory).map_err(|source| SetupError::CreateDir {
            path: directory.to_path_buf(),
            source,
        })?;

        if enable_console {
            self.sinks.push(LogSink::console(config.console_level));
        }

        let stamp = format_epoch(now_epoch_secs(), &config.timestamp_format);
        let path = directory.join(format!("{}_{stamp}.log", self.name));
        let file_sink = LogSink::file(
            &path,
            config.file_mode,
            config.file_level,
            &config.timestamp_format,
        )
        .map_err(|source| SetupError::OpenLogFile {
            path: path.clone(),
            source,
        })?;
        self.sinks.push(file_sink);
        self.log_file = Some(path);
        Ok(())
    }

    /// Returns the logger's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the logger's own minimum severity.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Returns the number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Returns the path of the current log file, if a file sink is attached.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Swaps the console sink's writer, returning the previous one.
    ///
    /// Returns `None` when no console sink is attached (the tracking
    /// logger). Tests use this to capture console output.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_console_target(
        &mut self,
        target: Box<dyn Write + Send>,
    ) -> Option<Box<dyn Write + Send>> {
        let sink = self
            .sinks
            .iter_mut()
            .find(|sink| sink.kind() == SinkKind::Console)?;
        Some(sink.replace_target(target))
    }

    /// Writes one record to every sink that passes both floors.
    ///
    /// `console_visible` is the per-call predicate computed by dispatch:
    /// when false, console-kind sinks are skipped for this record while file
    /// sinks still receive it. No sink state changes either way, so
    /// suppression cannot leak into other calls.
    pub fn log(&mut self, severity: Severity, text: &str, console_visible: bool) -> io::Result<()> {
        if !severity.passes(self.threshold) {
            return Ok(());
        }
        let record = Record::new(severity, text, now_epoch_secs());
        for sink in &mut self.sinks {
            if sink.kind() == SinkKind::Console && !console_visible {
                continue;
            }
            sink.write_record(&record)?;
        }
        Ok(())
    }

    /// Logs at `Debug`, console-visible.
    pub fn debug(&mut self, text: &str) -> io::Result<()> {
        self.log(Severity::Debug, text, true)
    }

    /// Logs at `Info`, console-visible.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.log(Severity::Info, text, true)
    }

    /// Logs at `Warning`, console-visible.
    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.log(Severity::Warning, text, true)
    }

    /// Logs at `Error`, console-visible.
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.log(Severity::Error, text, true)
    }

    /// Flushes every attached sink.
    pub fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}
