/// Returns true if `resolved` lies inside the crawl boundary `base`
///
/// This is a literal string-prefix test, not an origin comparison. It
/// therefore accepts look-alike hosts that share the prefix, e.g.
/// `https://example.com.attacker.net/x` is in scope for
/// `https://example.com`. Callers that need origin confinement must compare
/// scheme and host themselves.
///
/// # Examples
///
/// ```
/// use site_indexer::url::in_scope;
///
/// assert!(in_scope("https://example.com/about", "https://example.com"));
/// assert!(!in_scope("https://external.com/", "https://example.com"));
/// ```
pub fn in_scope(resolved: &str, base: &str) -> bool {
    resolved.starts_with(base)
}
