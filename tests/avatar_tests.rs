//! Tests for avatar URL construction.

use gravurl::*;

const EMAIL: &str = "myemailaddress@example.com";
const HASH: &str = "84059b07d4be67b806386c0aad8070a23f18836bbaae342275dc0a83414c32ee";
const DEFAULT_IMAGE: &str = "https://placehold.co/600x400.png";

#[test]
fn test_starts_with_avatar_base() {
    let url = avatar_url(EMAIL, None).unwrap();
    assert!(url.starts_with(AVATAR_BASE_URL));
}

#[test]
fn test_hash_is_last_path_segment() {
    let url = avatar_url(EMAIL, None).unwrap();
    let segments = get_path_segments(&url).unwrap();

    assert_eq!(segments, vec!["avatar", HASH]);
}

#[test]
fn test_without_options_has_no_query() {
    let url = avatar_url(EMAIL, None).unwrap();

    assert!(parse_query(&url).unwrap().is_empty());
    assert!(!url.contains('?'));
}

#[test]
fn test_protocols() {
    let default = avatar_url(EMAIL, None).unwrap();
    assert!(default.starts_with("https://"));

    let https = avatar_url(EMAIL, Some(&AvatarOptions::new().protocol(Protocol::Https))).unwrap();
    assert!(https.starts_with("https://"));

    let http = avatar_url(EMAIL, Some(&AvatarOptions::new().protocol(Protocol::Http))).unwrap();
    assert!(http.starts_with("http://"));

    let auto = avatar_url(EMAIL, Some(&AvatarOptions::new().protocol(Protocol::Auto))).unwrap();
    assert!(auto.starts_with("//"));
    assert!(is_scheme_relative(&auto));
    assert_eq!(auto, format!("//gravatar.com/avatar/{}", HASH));
}

#[test]
fn test_default_image() {
    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().default_image(DEFAULT_IMAGE))).unwrap();
    assert_eq!(get_query_value(&url, "d").unwrap(), Some(DEFAULT_IMAGE.to_string()));

    for token in DEFAULT_IMAGES {
        let url = avatar_url(EMAIL, Some(&AvatarOptions::new().default_image(token))).unwrap();
        assert_eq!(get_query_value(&url, "d").unwrap(), Some(token.to_string()));
    }
}

#[test]
fn test_rating() {
    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().rating(Rating::Pg))).unwrap();
    assert_eq!(get_query_value(&url, "r").unwrap(), Some("pg".to_string()));
}

#[test]
fn test_force_default() {
    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().force_default(true))).unwrap();
    assert_eq!(get_query_value(&url, "f").unwrap(), Some("y".to_string()));

    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().force_default(false))).unwrap();
    assert_eq!(get_query_value(&url, "f").unwrap(), None);

    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().size(10))).unwrap();
    assert_eq!(get_query_value(&url, "f").unwrap(), None);
}

#[test]
fn test_size() {
    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().size(120))).unwrap();
    assert_eq!(get_query_value(&url, "s").unwrap(), Some("120".to_string()));
}

#[test]
fn test_include_extension() {
    let url = avatar_url(EMAIL, Some(&AvatarOptions::new().include_extension(true))).unwrap();
    let segments = get_path_segments(&url).unwrap();

    assert_eq!(segments.last().unwrap(), &format!("{}{}", HASH, AVATAR_EXTENSION));
    assert!(url.ends_with(".jpg"));
}

#[test]
fn test_combined_options() {
    let opts = AvatarOptions::from_pairs(vec![
        ("protocol", "http"),
        ("defaultImage", DEFAULT_IMAGE),
        ("forceDefault", "true"),
        ("includeExtention", "true"),
        ("rating", "r"),
        ("size", "100"),
    ]);
    let url = avatar_url(EMAIL, Some(&opts)).unwrap();

    assert!(url.starts_with("http://"), "starts with http: {}", url);
    assert!(get_path_segments(&url).unwrap().last().unwrap().ends_with(".jpg"));

    let params = parse_query(&url).unwrap();
    assert_eq!(params.len(), 4);
    assert_eq!(params.get("d"), Some(&DEFAULT_IMAGE.to_string()));
    assert_eq!(params.get("f"), Some(&"y".to_string()));
    assert_eq!(params.get("s"), Some(&"100".to_string()));
    assert_eq!(params.get("r"), Some(&"r".to_string()));
}

#[test]
fn test_unrecognized_keys_are_ignored() {
    let opts = AvatarOptions::from_pairs(vec![("background", "blue"), ("size", "64")]);
    let url = avatar_url(EMAIL, Some(&opts)).unwrap();

    assert_eq!(url, format!("https://gravatar.com/avatar/{}?s=64", HASH));
}

#[test]
fn test_idempotent() {
    let opts = AvatarOptions::new()
        .size(200)
        .rating(Rating::X)
        .default_image(DefaultImage::RoboHash)
        .include_extension(true);

    let first = avatar_url(EMAIL, Some(&opts)).unwrap();
    let second = avatar_url(EMAIL, Some(&opts)).unwrap();
    assert_eq!(first, second);
}
