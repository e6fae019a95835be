//! Syntactic validation of submitted URLs.
//!
//! A URL is accepted only if it starts with `http://` or `https://` and the whole
//! string is a well-formed absolute URL whose host is `localhost`, an IP literal,
//! or a dotted domain name with an alphabetic top-level label. No I/O happens here;
//! whether the host actually exists is checked separately by a
//! [`crate::domain::HostResolver`].

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use url::{Host, Url};

use crate::utils::host::extract_host;

/// Case-insensitive `http://` / `https://` prefix.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

const MAX_LABEL_LEN: usize = 63;

/// Returns true if `input` is a well-formed absolute HTTP(S) URL.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_validator::is_valid_format;
///
/// assert!(is_valid_format("https://www.freecodecamp.org/"));
/// assert!(!is_valid_format("ftp://example.com"));
/// assert!(!is_valid_format("http://"));
/// ```
pub fn is_valid_format(input: &str) -> bool {
    if !SCHEME_REGEX.is_match(input) {
        return false;
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '"')
    {
        return false;
    }

    // The parser tolerates extra slashes after the scheme; the raw authority must be present.
    let Some(authority) = extract_host(input) else {
        return false;
    };

    let Ok(url) = Url::parse(input) else {
        return false;
    };

    match url.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        Some(Host::Ipv4(_)) => is_dotted_quad(authority),
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Checks a parsed (lowercased, punycode) domain name.
fn is_valid_domain(domain: &str) -> bool {
    if domain == "localhost" {
        return true;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    if !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    labels.last().is_some_and(|tld| is_valid_tld(tld))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_valid_tld(tld: &str) -> bool {
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic()))
}

/// The URL parser accepts shorthand IPv4 forms such as `1.2.3`; only a full
/// dotted quad is accepted here.
fn is_dotted_quad(authority: &str) -> bool {
    let authority = authority.split(['?', '#']).next().unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, rest)| rest);
    let host = host_port.split(':').next().unwrap_or_default();
    host.parse::<Ipv4Addr>().is_ok()
}
