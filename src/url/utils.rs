//! URL parsing and manipulation utilities.
//!
//! Small operations on top of the `url` crate that the avatar and profile
//! builders rely on, plus inspection helpers for working with generated URLs.

use url::Url;
use crate::error::GravurlError;
use std::collections::HashMap;

/// Append the identifier as the last path segment of a base URL.
///
/// A trailing slash on the base is absorbed, so `https://host/` and
/// `https://host` both yield `https://host/<id>`.
///
/// # Examples
///
/// ```
/// use gravurl::join_identifier;
/// use url::Url;
///
/// let base = Url::parse("https://gravatar.com/avatar").unwrap();
/// let url = join_identifier(&base, "abc").unwrap();
/// assert_eq!(url.as_str(), "https://gravatar.com/avatar/abc");
/// ```
pub fn join_identifier(base: &Url, id: &str) -> Result<Url, GravurlError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| GravurlError::InvalidScheme)?
        .pop_if_empty()
        .push(id);
    Ok(url)
}

/// Set a query parameter, replacing any existing value for `key`.
///
/// Other parameters keep their relative order; the new pair goes last.
///
/// # Examples
///
/// ```
/// use gravurl::set_query_param;
/// use url::Url;
///
/// let mut url = Url::parse("https://example.com/a?s=10&r=g").unwrap();
/// set_query_param(&mut url, "s", "80");
/// assert_eq!(url.as_str(), "https://example.com/a?r=g&s=80");
/// ```
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(key, value);
}

/// Append a literal suffix to the URL path, before any query string.
///
/// # Examples
///
/// ```
/// use gravurl::append_path_suffix;
/// use url::Url;
///
/// let mut url = Url::parse("https://example.com/avatar/abc?s=1").unwrap();
/// append_path_suffix(&mut url, ".jpg");
/// assert_eq!(url.as_str(), "https://example.com/avatar/abc.jpg?s=1");
/// ```
pub fn append_path_suffix(url: &mut Url, suffix: &str) {
    let path = format!("{}{}", url.path(), suffix);
    url.set_path(&path);
}

/// Serialize a URL without its scheme, producing a scheme-relative URL.
///
/// # Examples
///
/// ```
/// use gravurl::strip_scheme;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/avatar").unwrap();
/// assert_eq!(strip_scheme(&url), "//example.com/avatar");
/// ```
pub fn strip_scheme(url: &Url) -> String {
    // Serialization always starts with "<scheme>:"
    url.as_str()[url.scheme().len() + 1..].to_string()
}

/// Parse query string into a HashMap of key-value pairs.
///
/// Handles URL decoding of both keys and values. Scheme-relative URLs are
/// resolved against `https:` first.
///
/// # Examples
///
/// ```
/// use gravurl::parse_query;
///
/// let params = parse_query("https://example.com?foo=bar&page=1").unwrap();
/// assert_eq!(params.get("foo"), Some(&"bar".to_string()));
/// assert_eq!(params.get("page"), Some(&"1".to_string()));
/// ```
pub fn parse_query(url: &str) -> Result<HashMap<String, String>, GravurlError> {
    let parsed = parse_lenient(url)?;

    let mut params = HashMap::new();
    for (key, value) in parsed.query_pairs() {
        params.insert(key.to_string(), value.to_string());
    }

    Ok(params)
}

/// Get a specific query parameter value.
///
/// # Examples
///
/// ```
/// use gravurl::get_query_value;
///
/// let value = get_query_value("https://example.com?d=identicon&s=80", "d").unwrap();
/// assert_eq!(value, Some("identicon".to_string()));
///
/// let missing = get_query_value("https://example.com?s=80", "f").unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn get_query_value(url: &str, key: &str) -> Result<Option<String>, GravurlError> {
    let params = parse_query(url)?;
    Ok(params.get(key).cloned())
}

/// Split a URL's path into segments.
///
/// Removes empty segments.
///
/// # Examples
///
/// ```
/// use gravurl::get_path_segments;
///
/// let segments = get_path_segments("https://gravatar.com/avatar/abc.jpg").unwrap();
/// assert_eq!(segments, vec!["avatar", "abc.jpg"]);
/// ```
pub fn get_path_segments(url: &str) -> Result<Vec<String>, GravurlError> {
    let parsed = parse_lenient(url)?;
    Ok(parsed.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default())
}

/// Check if a URL is protocol-agnostic (starts with `//`).
///
/// # Examples
///
/// ```
/// use gravurl::is_scheme_relative;
///
/// assert!(is_scheme_relative("//gravatar.com/avatar"));
/// assert!(!is_scheme_relative("https://gravatar.com/avatar"));
/// ```
pub fn is_scheme_relative(url: &str) -> bool {
    url.starts_with("//")
}

fn parse_lenient(url: &str) -> Result<Url, GravurlError> {
    if is_scheme_relative(url) {
        Ok(Url::parse(&format!("https:{}", url))?)
    } else {
        Ok(Url::parse(url)?)
    }
}
