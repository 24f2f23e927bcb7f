#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `raybug_logging` wires the primitives from [`raybug_core`] into a working
//! logging facility for a treatment-planning scripting host: a configuration
//! store loaded once at startup, a logger factory that opens timestamped log
//! files, a process-wide registry holding the two long-lived loggers, and the
//! [`bug`](LogRegistry::bug) dispatch entry point that routes messages by
//! severity-level string.
//!
//! # Design
//!
//! The registry is an explicit value constructed once and passed by handle to
//! every call site; there are no module-level globals. Dispatch maps the
//! level string onto a closed [`DispatchLevel`] enumeration and an explicit
//! route table, and console visibility for debug-level messages is a pure
//! per-call predicate computed before any write. No sink state is ever
//! mutated during dispatch, so a suppressed message can neither leak to the
//! console nor leave a writer muted for a later call.
//!
//! # Invariants
//!
//! - The tracking logger never has a console sink; `track` messages reach
//!   only its file writer.
//! - A record is emitted by a sink iff it clears the logger floor *and* that
//!   sink's own floor; the two thresholds are independent.
//! - Re-initializing a logger discards its previous sinks before attaching
//!   new ones; repeated setup never duplicates output.
//!
//! # Errors
//!
//! Startup failures (unreadable configuration, uncreatable directory,
//! unopenable log file) surface as [`SetupError`] at construction and are
//! fatal. Per-write failures stay plain [`std::io::Error`] values from the
//! underlying sink.
//!
//! # Examples
//!
//! ```no_run
//! use raybug_logging::{LogConfig, LogRegistry};
//!
//! let mut registry = LogRegistry::new(LogConfig::default())?;
//! registry.bug("Script started", "debug", true)?;
//! registry.bug("User opened patient plan", "track", false)?;
//! registry.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
mod error;
pub mod levels;
pub mod logger;
pub mod registry;
pub mod sink;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use config::{ConfigError, FileMode, LogConfig};
pub use error::SetupError;
pub use levels::{Destination, DispatchLevel};
pub use logger::Logger;
pub use registry::LogRegistry;
pub use sink::{LogSink, SinkFormat, SinkKind};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, RayBugLayer, SharedRegistry};
