#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `raybug_core` provides the message primitives shared across the raybug
//! workspace: the ordered [`Severity`] scale, the ephemeral [`Record`] that
//! sinks render, the text decoration helpers applied before dispatch, and the
//! timestamp formatting used both for log file names and file-writer line
//! prefixes.
//!
//! # Design
//!
//! Everything in this crate is pure data and pure functions. Records are
//! never persisted as structures; they exist only long enough for a sink in
//! `raybug-logging` to render them into a line of text. Decoration is a pair
//! of plain functions rather than a formatter hierarchy, and timestamps are
//! expanded from a strftime-style subset without consulting wall-clock state.
//!
//! # Examples
//!
//! ```
//! use raybug_core::{decor, timestamp, Record, Severity};
//!
//! let text = decor::decorate_title("Script started", '~', 5);
//! assert_eq!(text, "~~~~~ Script started ~~~~~");
//!
//! let record = Record::new(Severity::Debug, &text, 0);
//! assert_eq!(record.severity.as_str(), "DEBUG");
//! assert_eq!(timestamp::format_epoch(record.epoch_secs, "%Y%m%d"), "19700101");
//! ```

pub mod decor;
pub mod record;
pub mod severity;
pub mod timestamp;

pub use record::Record;
pub use severity::{ParseSeverityError, Severity};
