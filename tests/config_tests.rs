//! Tests for builders running against custom base URLs.

use gravurl::*;

#[test]
fn test_mirror_bases() {
    let config = GravurlConfig::default()
        .with_avatar_base("https://images.example.net/gravatar/avatar")
        .unwrap()
        .with_profile_base("https://images.example.net/gravatar/")
        .unwrap();
    let builder = UrlBuilder::with_config(config);
    let hash = hash_email("someone@example.com");

    let avatar = builder
        .avatar_url("someone@example.com", Some(&AvatarOptions::new().size(32)))
        .unwrap();
    assert_eq!(
        avatar,
        format!("https://images.example.net/gravatar/avatar/{}?s=32", hash)
    );

    let profile = builder
        .profile_url("someone@example.com", Some(ProfileFormat::Xml), None)
        .unwrap();
    assert_eq!(profile, format!("https://images.example.net/gravatar/{}.xml", hash));
}

#[test]
fn test_http_base_with_https_protocol_is_unchanged() {
    let config = GravurlConfig::default()
        .with_avatar_base("http://intranet.example/avatar")
        .unwrap();
    let builder = UrlBuilder::with_config(config);

    let url = builder
        .avatar_url("someone@example.com", Some(&AvatarOptions::new().protocol(Protocol::Https)))
        .unwrap();
    assert!(url.starts_with("http://intranet.example/avatar/"));

    let url = builder
        .avatar_url("someone@example.com", Some(&AvatarOptions::new().protocol(Protocol::Auto)))
        .unwrap();
    assert!(url.starts_with("//intranet.example/avatar/"));
}

#[test]
fn test_invalid_base_is_rejected() {
    assert_eq!(
        GravurlConfig::default().with_avatar_base("mailto:someone@example.com"),
        Err(GravurlError::InvalidScheme)
    );
}

#[test]
fn test_base_with_query_or_fragment_is_rejected() {
    let result = GravurlConfig::default().with_avatar_base("https://m.example/avatar?k=a%20b#frag");
    assert_eq!(result, Err(GravurlError::InvalidBaseUrl));

    let result = GravurlConfig::default().with_profile_base("https://m.example/#top");
    assert_eq!(result, Err(GravurlError::InvalidBaseUrl));
}

#[test]
fn test_accepted_base_builds_clean_urls() {
    let config = GravurlConfig::default()
        .with_avatar_base("https://m.example/avatar")
        .unwrap();
    let builder = UrlBuilder::with_config(config);
    let hash = hash_email("someone@example.com");

    let bare = builder.avatar_url("someone@example.com", None).unwrap();
    assert!(parse_query(&bare).unwrap().is_empty());

    let opts = AvatarOptions::new().size(1).include_extension(true);
    let url = builder.avatar_url("someone@example.com", Some(&opts)).unwrap();
    assert_eq!(url, format!("https://m.example/avatar/{}.jpg?s=1", hash));
}

#[test]
fn test_builder_shared_across_threads() {
    let builder = std::sync::Arc::new(UrlBuilder::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let builder = builder.clone();
            std::thread::spawn(move || {
                builder
                    .avatar_url("someone@example.com", Some(&AvatarOptions::new().size(10 * (i + 1))))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let url = handle.join().unwrap();
        assert!(url.ends_with(&format!("?s={}", 10 * (i + 1))));
    }
}
