//! crates/core/src/timestamp.rs
//! Timestamp formatting for log file names and file-writer line prefixes.
//!
//! Supports the strftime-style subset the configuration actually uses:
//! `%Y %y %m %d %H %M %S` plus `%%` for a literal percent. Unknown escapes
//! pass through verbatim and a trailing `%` is kept as-is, so a typo in the
//! configured format degrades visibly instead of failing.

use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current time as seconds since the Unix epoch.
///
/// A clock set before the epoch collapses to zero rather than failing; log
/// timestamps are diagnostics, not authoritative data.
#[must_use]
pub fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// Expands a strftime-style format for the given epoch instant (UTC).
///
/// # Examples
///
/// ```
/// use raybug_core::timestamp::format_epoch;
///
/// assert_eq!(format_epoch(0, "%Y%m%d_%H%M%S"), "19700101_000000");
/// assert_eq!(format_epoch(0, "%Y-%m-%d"), "1970-01-01");
/// ```
#[must_use]
pub fn format_epoch(epoch_secs: u64, format: &str) -> String {
    let total_days = epoch_secs / 86_400;
    let day_seconds = (epoch_secs % 86_400) as u32;
    let (year, month, day) = civil_from_days(total_days as i64);
    let hours = day_seconds / 3_600;
    let minutes = (day_seconds % 3_600) / 60;
    let seconds = day_seconds % 60;

    let mut result = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('Y') => {
                let _ = write!(result, "{year:04}");
            }
            Some('y') => {
                let _ = write!(result, "{:02}", year.rem_euclid(100));
            }
            Some('m') => {
                let _ = write!(result, "{month:02}");
            }
            Some('d') => {
                let _ = write!(result, "{day:02}");
            }
            Some('H') => {
                let _ = write!(result, "{hours:02}");
            }
            Some('M') => {
                let _ = write!(result, "{minutes:02}");
            }
            Some('S') => {
                let _ = write!(result, "{seconds:02}");
            }
            Some('%') => result.push('%'),
            Some(other) => {
                // Unknown escape: pass through verbatim
                result.push('%');
                result.push(other);
            }
            None => {
                // Trailing percent with no escape character
                result.push('%');
            }
        }
    }

    result
}

/// Converts a day count (days since 1970-01-01) to a civil date.
///
/// Algorithm from Howard Hinnant's date library (public domain).
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let day_of_era = (z - era * 146_097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let mut year = i64::from(year_of_era) + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    if month <= 2 {
        year += 1;
    }
    (year as i32, month, day)
}
