use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal failures while constructing loggers at startup.
///
/// There is no retry path: a registry either comes up with both loggers
/// file-backed or construction fails with the first problem hit.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A log directory could not be created.
    #[error("failed to create log directory '{}': {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A log file could not be opened for writing.
    #[error("failed to open log file '{}': {source}", .path.display())]
    OpenLogFile {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The configuration file was unreadable or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
