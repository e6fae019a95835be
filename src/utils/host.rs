//! Host segment extraction for reachability checks.

/// Returns the third `/`-delimited segment of `url`, i.e. the raw authority.
///
/// The segment is returned verbatim: port and userinfo are not stripped.
/// Returns `None` when the segment is missing or empty.
///
/// # Examples
///
/// ```
/// use shorturl::utils::host::extract_host;
///
/// assert_eq!(extract_host("https://example.com/a/b"), Some("example.com"));
/// assert_eq!(extract_host("http://example.com:8080"), Some("example.com:8080"));
/// assert_eq!(extract_host("http:///path"), None);
/// ```
pub fn extract_host(url: &str) -> Option<&str> {
    url.split('/').nth(2).filter(|segment| !segment.is_empty())
}
