//! The ordered severity scale and its textual forms.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Variants are declared in ascending seriousness so that the derived
/// ordering drives every threshold comparison in the workspace: a record
/// clears a floor iff its severity compares greater than or equal to it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Diagnostic detail for script authors.
    Debug,
    /// Routine informational message.
    Info,
    /// Something unexpected that does not stop the script.
    Warning,
    /// A failure the script author must look at.
    Error,
    /// Reserved top of the scale; nothing routes here, but thresholds may
    /// name it to silence a writer entirely.
    Critical,
}

impl Severity {
    /// Returns the uppercase label rendered into log lines.
    ///
    /// File writers emit `{timestamp} - {LEVEL} - {message}` and console
    /// writers emit `{LEVEL} {message}`; both take `{LEVEL}` from here, so
    /// the canonical wording lives in one place.
    ///
    /// # Examples
    ///
    /// ```
    /// use raybug_core::Severity;
    ///
    /// assert_eq!(Severity::Debug.as_str(), "DEBUG");
    /// assert_eq!(Severity::Warning.as_str(), "WARNING");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Reports whether this severity clears the given floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use raybug_core::Severity;
    ///
    /// assert!(Severity::Error.passes(Severity::Warning));
    /// assert!(!Severity::Debug.passes(Severity::Info));
    /// ```
    #[must_use]
    pub fn passes(self, floor: Self) -> bool {
        self >= floor
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name case-insensitively, matching the spelling used
    /// in configuration files (`debug`, `info`, `warning`, `error`,
    /// `critical`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lowered = input.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ascends_with_seriousness() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn labels_are_uppercase() {
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(Severity::Critical.as_str(), "CRITICAL");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", Severity::Warning), "WARNING");
    }

    #[test]
    fn passes_is_inclusive() {
        assert!(Severity::Info.passes(Severity::Info));
        assert!(Severity::Critical.passes(Severity::Debug));
        assert!(!Severity::Debug.passes(Severity::Critical));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" info ".parse::<Severity>(), Ok(Severity::Info));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("verbose".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let encoded = serde_json::to_string(&Severity::Warning).expect("serializes");
        let decoded: Severity = serde_json::from_str(&encoded).expect("deserializes");
        assert_eq!(decoded, Severity::Warning);
    }
}
