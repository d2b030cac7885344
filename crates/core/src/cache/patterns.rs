//! Glob matching for cache keys.

/// Checks if a cache key matches a glob pattern.
///
/// `*` matches any sequence of characters, including none. There are no
/// other metacharacters.
///
/// # Examples
///
/// ```
/// use reelscout_core::cache::pattern_matches;
///
/// assert!(pattern_matches("project:1:*", "project:1:locations"));
/// assert!(pattern_matches("enrichment:*:51.500:*", "enrichment:weather:51.500:-0.120"));
/// assert!(!pattern_matches("project:1:*", "location:1"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut parts = pattern.split('*');
    // split always yields at least one item
    let first = parts.next().unwrap_or_default();
    let Some(mut rest) = key.strip_prefix(first) else {
        return false;
    };

    let middle: Vec<&str> = parts.collect();
    let Some((last, middle)) = middle.split_last() else {
        // no wildcard at all
        return rest.is_empty();
    };

    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}
