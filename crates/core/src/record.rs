//! The ephemeral log record handed to sinks.

use crate::severity::Severity;

/// A single log record: severity, already-decorated text, and the emit time.
///
/// Records are ephemeral. Dispatch builds one per call and hands it to every
/// sink attached to the routed logger; nothing stores it afterwards. The
/// timestamp is captured once at emit so that every sink renders the same
/// instant.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    /// Severity the record was routed at.
    pub severity: Severity,
    /// Decorated message text (title borders or prefix already applied).
    pub text: &'a str,
    /// Seconds since the Unix epoch at the moment of emit.
    pub epoch_secs: u64,
}

impl<'a> Record<'a> {
    /// Builds a record from its parts.
    #[must_use]
    pub const fn new(severity: Severity, text: &'a str, epoch_secs: u64) -> Self {
        Self {
            severity,
            text,
            epoch_secs,
        }
    }
}
