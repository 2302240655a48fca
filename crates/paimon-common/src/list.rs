//! Delimited list parsing.

/// Split a delimited string into trimmed tokens.
///
/// `None` and `""` produce an empty list. Otherwise the value is split on the
/// literal `delimiter` and each token is trimmed; order is preserved, nothing
/// is deduplicated, and empty tokens from the split are kept.
///
/// # Examples
///
/// ```
/// use paimon_common::parse_list;
///
/// assert_eq!(parse_list(Some("a,b, c"), ","), vec!["a", "b", "c"]);
/// assert!(parse_list(None, ",").is_empty());
/// assert!(parse_list(Some(""), ",").is_empty());
/// ```
pub fn parse_list(value: Option<&str>, delimiter: &str) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(value) => value
            .split(delimiter)
            .map(|token| token.trim().to_string())
            .collect(),
    }
}
