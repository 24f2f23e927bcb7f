//! crates/logging/src/levels.rs
//! The dispatch-level enumeration and its route table.

use raybug_core::Severity;

/// Which process-wide logger a dispatched message lands on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    /// The debug/diagnostic logger (file plus optional console).
    Debug,
    /// The user-action tracking logger (file only).
    Tracking,
}

/// Severity-level strings accepted by [`bug`](crate::LogRegistry::bug),
/// closed into an enumeration.
///
/// Parsing is total: anything that is not `error`, `warning`, `debug`, or
/// `track` (case-insensitively) maps to [`Unknown`](Self::Unknown), which
/// routes exactly like `debug`. No warning is emitted for unrecognized
/// strings; callers' typos degrade to diagnostics instead of raising.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchLevel {
    /// A failure; always console-visible.
    Error,
    /// A warning; always console-visible.
    Warning,
    /// Diagnostic detail; console visibility is gated by configuration.
    Debug,
    /// A user action destined for the tracking log only.
    Track,
    /// Fallback for unrecognized level strings; behaves like `Debug`.
    Unknown,
}

impl DispatchLevel {
    /// Parses a level string case-insensitively. Never fails.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("error") {
            Self::Error
        } else if input.eq_ignore_ascii_case("warning") {
            Self::Warning
        } else if input.eq_ignore_ascii_case("debug") {
            Self::Debug
        } else if input.eq_ignore_ascii_case("track") {
            Self::Track
        } else {
            Self::Unknown
        }
    }

    /// Returns the destination logger and the severity to emit at.
    #[must_use]
    pub const fn route(self) -> (Destination, Severity) {
        match self {
            Self::Error => (Destination::Debug, Severity::Error),
            Self::Warning => (Destination::Debug, Severity::Warning),
            Self::Debug | Self::Unknown => (Destination::Debug, Severity::Debug),
            Self::Track => (Destination::Tracking, Severity::Info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_the_four_levels() {
        assert_eq!(DispatchLevel::parse("error"), DispatchLevel::Error);
        assert_eq!(DispatchLevel::parse("warning"), DispatchLevel::Warning);
        assert_eq!(DispatchLevel::parse("debug"), DispatchLevel::Debug);
        assert_eq!(DispatchLevel::parse("track"), DispatchLevel::Track);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(DispatchLevel::parse("ERROR"), DispatchLevel::Error);
        assert_eq!(DispatchLevel::parse("Track"), DispatchLevel::Track);
        assert_eq!(DispatchLevel::parse("dEbUg"), DispatchLevel::Debug);
    }

    #[test]
    fn parse_falls_back_to_unknown() {
        assert_eq!(DispatchLevel::parse("verbose"), DispatchLevel::Unknown);
        assert_eq!(DispatchLevel::parse(""), DispatchLevel::Unknown);
        assert_eq!(DispatchLevel::parse("warn"), DispatchLevel::Unknown);
    }

    #[test]
    fn route_table_matches_dispatch_contract() {
        assert_eq!(
            DispatchLevel::Error.route(),
            (Destination::Debug, Severity::Error)
        );
        assert_eq!(
            DispatchLevel::Warning.route(),
            (Destination::Debug, Severity::Warning)
        );
        assert_eq!(
            DispatchLevel::Debug.route(),
            (Destination::Debug, Severity::Debug)
        );
        assert_eq!(
            DispatchLevel::Track.route(),
            (Destination::Tracking, Severity::Info)
        );
    }

    #[test]
    fn unknown_routes_exactly_like_debug() {
        assert_eq!(DispatchLevel::Unknown.route(), DispatchLevel::Debug.route());
    }
}
