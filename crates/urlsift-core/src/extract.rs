//! Endpoint extraction from response bodies.
//!
//! Two byte-oriented passes: absolute `http(s)://` URLs anywhere in the body,
//! then relative paths that occupy a whole line and start and end with `/`.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// `http://` or `https://` followed by anything up to whitespace, a quote or `>`.
static ABSOLUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)https?://[^\t\n\x0C\r "'>]+"#).expect("absolute URL pattern")
});

/// A full line `/…/` made of ASCII word characters, `/`, `.` and `-`.
static RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m-u)^/[0-9A-Za-z_/.\-]+/$").expect("relative path pattern")
});

/// Returns every absolute URL match (in body order) followed by every
/// relative path match (in body order). No sorting or deduplication.
pub fn extract(body: &[u8]) -> Vec<String> {
    let mut endpoints = absolute_urls(body);
    endpoints.extend(relative_paths(body));
    endpoints
}

pub fn absolute_urls(body: &[u8]) -> Vec<String> {
    find_all(&ABSOLUTE, body)
}

pub fn relative_paths(body: &[u8]) -> Vec<String> {
    find_all(&RELATIVE, body)
}

fn find_all(re: &Regex, body: &[u8]) -> Vec<String> {
    re.find_iter(body)
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
        .collect()
}
