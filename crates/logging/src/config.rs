//! crates/logging/src/config.rs
//! Process-wide logging configuration: defaults, file parsing, directory
//! creation.
//!
//! The configuration is loaded once at startup and never mutated afterwards.
//! A settings file uses `key = value` lines with `#` or `;` comments:
//!
//! ```ini
//! # raybug settings
//! debug log dir = logs/debug
//! tracking log dir = logs/tracking
//! debug to console = no
//! title border char = ~
//! title border count = 5
//! file mode = append
//! ```
//!
//! Unknown keys and malformed values are rejected with the file path and
//! line number, keeping a hand-edited settings file honest.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use raybug_core::Severity;
use thiserror::Error;

use crate::error::SetupError;

/// How a log file is opened at logger construction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FileMode {
    /// Truncate any existing file; each run starts a fresh log.
    #[default]
    Truncate,
    /// Append to an existing file of the same name.
    Append,
}

impl FileMode {
    /// Returns the configuration-file spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`FileMode`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFileModeError {
    _private: (),
}

impl fmt::Display for ParseFileModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected 'truncate' or 'append'")
    }
}

impl std::error::Error for ParseFileModeError {}

impl FromStr for FileMode {
    type Err = ParseFileModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "append" => Ok(Self::Append),
            _ => Err(ParseFileModeError { _private: () }),
        }
    }
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read at all.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A line of the configuration file was malformed.
    #[error("{}: line {line}: {message}", .path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },
}

impl ConfigError {
    /// Returns the line number where the error occurred, if available.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Read { .. } => None,
            Self::Parse { line, .. } => Some(*line),
        }
    }

    /// Returns the configuration file path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    fn parse(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

/// Immutable logging settings, loaded once at startup.
///
/// Defaults mirror the stock settings file shipped with the tool; see each
/// field for the option it corresponds to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Directory for the debug logger's file writer (`debug log dir`).
    pub debug_log_dir: PathBuf,
    /// Directory for the tracking logger's file writer (`tracking log dir`).
    pub tracking_log_dir: PathBuf,
    /// Whether debug-level messages are shown on the console
    /// (`debug to console`). Errors and warnings always show regardless.
    pub debug_to_console: bool,
    /// Border character for title messages (`title border char`).
    pub title_border_char: char,
    /// Border repetitions on each side of a title (`title border count`).
    pub title_border_count: usize,
    /// Prefix for non-title messages (`message prefix`).
    pub message_prefix: String,
    /// strftime-style format used for log file names and file-writer line
    /// prefixes (`timestamp format`).
    pub timestamp_format: String,
    /// Base name of the debug log file (`debug log name`); combined with the
    /// timestamp as `{name}_{timestamp}.log`.
    pub debug_log_name: String,
    /// Base name of the tracking log file (`tracking log name`).
    pub tracking_log_name: String,
    /// Whether log files are truncated or appended on open (`file mode`).
    pub file_mode: FileMode,
    /// Floor below which file writers drop records (`file level`).
    pub file_level: Severity,
    /// Floor below which console writers drop records (`console level`).
    pub console_level: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug_log_dir: PathBuf::from("logs/debug"),
            tracking_log_dir: PathBuf::from("logs/tracking"),
            debug_to_console: true,
            title_border_char: '~',
            title_border_count: 5,
            message_prefix: "-".to_owned(),
            timestamp_format: "%Y%m%d_%H%M%S".to_owned(),
            debug_log_name: "debug".to_owned(),
            tracking_log_name: "track".to_owned(),
            file_mode: FileMode::Truncate,
            file_level: Severity::Debug,
            console_level: Severity::Debug,
        }
    }
}

impl LogConfig {
    /// Loads settings from a `key = value` file, starting from the defaults.
    ///
    /// Keys not present keep their default. Blank lines and lines starting
    /// with `#` or `;` are skipped. Every recognized key is listed in the
    /// module documentation; anything else is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        for (index, raw_line) in contents.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let Some((raw_key, raw_value)) = line.split_once('=') else {
                return Err(ConfigError::parse(
                    path,
                    line_number,
                    format!("expected 'key = value', got '{line}'"),
                ));
            };
            let key = raw_key.trim();
            let value = raw_value.trim();
            config.apply(key, value).map_err(|message| {
                ConfigError::parse(path, line_number, message)
            })?;
        }

        Ok(config)
    }

    /// Creates both log directories, including intermediate components.
    ///
    /// Creation is idempotent; existing directories are not an error.
    /// Failures (permissions, disk full) are fatal at startup.
    pub fn ensure_directories(&self) -> Result<(), SetupError> {
        for dir in [&self.debug_log_dir, &self.tracking_log_dir] {
            fs::create_dir_all(dir).map_err(|source| SetupError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Applies a single `key = value` pair; the error is the bare message,
    /// positioned by the caller.
    fn apply(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "debug log dir" => self.debug_log_dir = PathBuf::from(value),
            "tracking log dir" => self.tracking_log_dir = PathBuf::from(value),
            "debug to console" => self.debug_to_console = parse_bool(value)?,
            "title border char" => self.title_border_char = parse_char(value)?,
            "title border count" => {
                self.title_border_count = value
                    .parse()
                    .map_err(|_| format!("invalid count '{value}'"))?;
            }
            "message prefix" => self.message_prefix = value.to_owned(),
            "timestamp format" => self.timestamp_format = value.to_owned(),
            "debug log name" => self.debug_log_name = value.to_owned(),
            "tracking log name" => self.tracking_log_name = value.to_owned(),
            "file mode" => {
                self.file_mode = value.parse().map_err(|err| format!("{err}"))?;
            }
            "file level" => {
                self.file_level = value
                    .parse()
                    .map_err(|_| format!("invalid severity '{value}'"))?;
            }
            "console level" => {
                self.console_level = value
                    .parse()
                    .map_err(|_| format!("invalid severity '{value}'"))?;
            }
            _ => return Err(format!("unknown configuration key '{key}'")),
        }
        Ok(())
    }
}

/// Parses the boolean words accepted in settings files.
fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("invalid boolean '{value}'")),
    }
}

/// Parses a value that must be exactly one character.
fn parse_char(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(format!("expected a single character, got '{value}'")),
    }
}
