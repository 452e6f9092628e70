/// Escape LIKE wildcards (`%`, `_`) and the escape character itself in a search string
pub fn escape_like_wildcards(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build a `%term%` pattern for a case-insensitive substring search.
///
/// The term is trimmed and lower-cased; blank terms yield `None`.
pub fn contains_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("%{}%", escape_like_wildcards(&term.to_lowercase())))
}
