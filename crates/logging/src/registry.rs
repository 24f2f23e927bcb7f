//! crates/logging/src/registry.rs
//! The process-wide logger registry and the `bug` dispatch entry point.

use std::fmt;
use std::io::{self, Write};

use raybug_core::decor::{decorate_prefixed, decorate_title};
use raybug_core::Severity;

use crate::config::LogConfig;
use crate::error::SetupError;
use crate::levels::{Destination, DispatchLevel};
use crate::logger::Logger;

/// The two process-wide loggers, constructed once at startup.
///
/// The registry replaces module-level logger globals: construct it early,
/// keep it for the process lifetime, and pass it by reference to every call
/// site. The debug logger is file-backed with a console sink; the tracking
/// logger is file-backed only and never gains a console sink.
///
/// # Examples
///
/// ```no_run
/// use raybug_logging::{LogConfig, LogRegistry};
///
/// let mut registry = LogRegistry::new(LogConfig::default())?;
/// registry.bug("Structure Set Management", "debug", true)?;
/// registry.bug("User created PTV_Eval_High-03", "track", false)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LogRegistry {
    config: LogConfig,
    debug: Logger,
    tracking: Logger,
}

impl fmt::Debug for LogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRegistry")
            .field("debug", &self.debug)
            .field("tracking", &self.tracking)
            .finish_non_exhaustive()
    }
}

impl LogRegistry {
    /// Builds the registry: ensures both log directories exist, then creates
    /// the debug logger (Debug floor, console enabled) and the tracking
    /// logger (Debug floor, no console).
    ///
    /// Directory or file failures here are fatal; there is no partial
    /// registry.
    pub fn new(config: LogConfig) -> Result<Self, SetupError> {
        config.ensure_directories()?;
        let debug = Logger::create(
            &config.debug_log_name,
            true,
            true,
            &config.debug_log_dir,
            &config,
        )?;
        let tracking = Logger::create(
            &config.tracking_log_name,
            true,
            false,
            &config.tracking_log_dir,
            &config,
        )?;
        Ok(Self {
            config,
            debug,
            tracking,
        })
    }

    /// Builds the registry with the debug logger's console sink writing to
    /// `console` instead of standard output.
    pub fn with_console_writer(
        config: LogConfig,
        console: Box<dyn Write + Send>,
    ) -> Result<Self, SetupError> {
        let mut registry = Self::new(config)?;
        let _stdout = registry.debug.replace_console_target(console);
        Ok(registry)
    }

    /// Routes one message to the appropriate logger.
    ///
    /// The message is decorated first: wrapped in title borders when `title`
    /// is set, prefixed otherwise. The level string is matched
    /// case-insensitively; anything unrecognized routes like `debug` with no
    /// warning. Debug-level messages are withheld from the console when the
    /// `debug to console` setting is off — decided per call, before any
    /// write, so suppression can neither leak nor linger.
    ///
    /// Write failures surface as the underlying [`io::Error`]; a bad level
    /// string never fails.
    pub fn bug(&mut self, message: &str, level: &str, title: bool) -> io::Result<()> {
        let text = if title {
            decorate_title(
                message,
                self.config.title_border_char,
                self.config.title_border_count,
            )
        } else {
            decorate_prefixed(message, &self.config.message_prefix)
        };

        let (destination, severity) = DispatchLevel::parse(level).route();
        let console_visible = severity != Severity::Debug || self.config.debug_to_console;
        let logger = match destination {
            Destination::Debug => &mut self.debug,
            Destination::Tracking => &mut self.tracking,
        };
        logger.log(severity, &text, console_visible)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Returns the debug logger for direct severity calls.
    pub fn debug_logger(&mut self) -> &mut Logger {
        &mut self.debug
    }

    /// Returns the tracking logger for direct severity calls.
    pub fn tracking_logger(&mut self) -> &mut Logger {
        &mut self.tracking
    }

    /// Rebuilds both loggers' sinks in place.
    ///
    /// Prior sinks are discarded first (closing their files), then fresh
    /// timestamped files are opened. Output is never duplicated by repeated
    /// initialization. The debug logger's console sink is recreated on
    /// standard output.
    pub fn reinit(&mut self) -> Result<(), SetupError> {
        self.debug
            .attach_sinks(&self.config.debug_log_dir, true, &self.config)?;
        self.tracking
            .attach_sinks(&self.config.tracking_log_dir, false, &self.config)?;
        Ok(())
    }

    /// Flushes every sink on both loggers.
    pub fn flush(&mut self) -> io::Result<()> {
        self.debug.flush()?;
        self.tracking.flush()
    }

    /// Flushes and tears the registry down, closing all writers.
    pub fn close(mut self) -> io::Result<()> {
        self.flush()
    }
}
