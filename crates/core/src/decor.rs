//! Message decoration applied before dispatch.
//!
//! Title messages mark major section boundaries in a log and are wrapped in
//! border runs on both sides; everything else carries a short prefix. Both
//! shapes use single-space separators exactly.

/// Wraps a message in title borders: `{border} {message} {border}`.
///
/// The border is `border_char` repeated `border_count` times. A count of
/// zero produces empty borders with the separators still in place.
///
/// # Examples
///
/// ```
/// use raybug_core::decor::decorate_title;
///
/// assert_eq!(decorate_title("Script started", '~', 5), "~~~~~ Script started ~~~~~");
/// ```
#[must_use]
pub fn decorate_title(message: &str, border_char: char, border_count: usize) -> String {
    let mut border = String::with_capacity(border_count);
    for _ in 0..border_count {
        border.push(border_char);
    }
    format!("{border} {message} {border}")
}

/// Prefixes a message: `{prefix} {message}`.
///
/// # Examples
///
/// ```
/// use raybug_core::decor::decorate_prefixed;
///
/// assert_eq!(decorate_prefixed("Retrieving ROI List", "-"), "- Retrieving ROI List");
/// ```
#[must_use]
pub fn decorate_prefixed(message: &str, prefix: &str) -> String {
    format!("{prefix} {message}")
}
