use url::Url;

/// Joins a possibly-relative hyperlink target onto a base address
///
/// Relative targets inherit scheme, host and path context from `base`.
/// Absolute targets are returned exactly as written, so a link back to
/// `https://example.com` matches that address in the visited set rather than
/// its serialized form `https://example.com/`. If `base` does not parse or
/// the join fails, `raw` is returned unchanged and left for the scope test or
/// the fetcher to reject.
///
/// # Examples
///
/// ```
/// use site_indexer::url::resolve;
///
/// assert_eq!(resolve("/about", "https://example.com"), "https://example.com/about");
/// assert_eq!(resolve("team", "https://example.com/about/"), "https://example.com/about/team");
/// assert_eq!(resolve("https://other.com/x", "https://example.com"), "https://other.com/x");
/// ```
pub fn resolve(raw: &str, base: &str) -> String {
    if Url::parse(raw).is_ok() {
        return raw.to_string();
    }

    let base_url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Cannot parse base {} for joining {}: {}", base, raw, e);
            return raw.to_string();
        }
    };

    match base_url.join(raw) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            tracing::debug!("Cannot join {} onto {}: {}", raw, base, e);
            raw.to_string()
        }
    }
}
