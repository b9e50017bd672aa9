//! String conversion utilities.

/// Converts a blank string (empty or whitespace only) to `None`.
///
/// Request fields such as an optional game id arrive as empty strings from
/// some clients; those mean "not given".
///
/// # Examples
///
/// ```
/// use broadside_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("abc"), Some("abc"));
/// assert_eq!(none_if_blank(""), None);
/// assert_eq!(none_if_blank("  "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Optional-input version of [`none_if_blank`].
///
/// # Examples
///
/// ```
/// use broadside_domain::common::non_blank;
///
/// assert_eq!(non_blank(Some(" id ")), Some("id"));
/// assert_eq!(non_blank(Some("")), None);
/// assert_eq!(non_blank(None), None);
/// ```
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.and_then(none_if_blank)
}
