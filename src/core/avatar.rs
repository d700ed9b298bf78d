//! Avatar URL construction.
//!
//! Options are applied by an ordered rule pipeline: each rule inspects one
//! field of [`AvatarOptions`] and, when it is set, mutates the URL once.
//! The order is fixed and independent of how the options were built. The
//! protocol is handled after every rule because it rewrites the serialized form.

use tracing::{debug, trace};
use url::Url;

use crate::config::GravurlConfig;
use crate::core::hasher::{IdentifierHasher, Sha256Hasher};
use crate::error::GravurlError;
use crate::types::{AvatarOptions, Protocol};
use crate::url::utils::{append_path_suffix, join_identifier, set_query_param, strip_scheme};

/// Extension appended to the path when `include_extension` is set.
pub const AVATAR_EXTENSION: &str = ".jpg";

type AvatarRule = fn(&AvatarOptions, &mut Url);

/// Structured mutations, in application order.
const AVATAR_RULES: &[(&str, AvatarRule)] = &[
    ("size", apply_size),
    ("default_image", apply_default_image),
    ("force_default", apply_force_default),
    ("rating", apply_rating),
    ("include_extension", apply_include_extension),
];

fn apply_size(options: &AvatarOptions, url: &mut Url) {
    if let Some(size) = options.size {
        set_query_param(url, "s", &size.to_string());
    }
}

fn apply_default_image(options: &AvatarOptions, url: &mut Url) {
    if let Some(image) = &options.default_image {
        set_query_param(url, "d", image.as_str());
    }
}

fn apply_force_default(options: &AvatarOptions, url: &mut Url) {
    if options.force_default == Some(true) {
        set_query_param(url, "f", "y");
    }
}

fn apply_rating(options: &AvatarOptions, url: &mut Url) {
    if let Some(rating) = options.rating {
        set_query_param(url, "r", rating.as_str());
    }
}

fn apply_include_extension(options: &AvatarOptions, url: &mut Url) {
    if options.include_extension == Some(true) {
        append_path_suffix(url, AVATAR_EXTENSION);
    }
}

/// Serialize the URL under the requested protocol.
fn serialize_with_protocol(mut url: Url, protocol: Option<Protocol>) -> Result<String, GravurlError> {
    match protocol {
        None | Some(Protocol::Https) => Ok(url.into()),
        Some(Protocol::Http) => {
            if url.scheme() == "https" {
                url.set_scheme("http").map_err(|()| GravurlError::InvalidScheme)?;
            }
            Ok(url.into())
        }
        Some(Protocol::Auto) => Ok(strip_scheme(&url)),
    }
}

/// Compose an avatar URL for an already-hashed identifier.
///
/// With `options == None` the result is `<base>/<id>` with no query string.
pub fn compose_avatar_url(
    base: &Url,
    id: &str,
    options: Option<&AvatarOptions>,
) -> Result<String, GravurlError> {
    let mut url = join_identifier(base, id)?;

    let Some(options) = options else {
        return Ok(url.into());
    };

    for (name, rule) in AVATAR_RULES {
        rule(options, &mut url);
        trace!(rule = *name, url = %url, "applied avatar rule");
    }

    serialize_with_protocol(url, options.protocol)
}

/// Build an avatar URL with a custom configuration and hasher.
pub fn avatar_url_with<H: IdentifierHasher + ?Sized>(
    config: &GravurlConfig,
    hasher: &H,
    email: &str,
    options: Option<&AvatarOptions>,
) -> Result<String, GravurlError> {
    let id = hasher.hash(email)?;
    let url = compose_avatar_url(config.avatar_base(), &id, options)?;
    debug!(%url, "built avatar url");
    Ok(url)
}

/// Build the avatar image URL for an email address.
///
/// # Examples
///
/// ```
/// use gravurl::{avatar_url, AvatarOptions, Rating};
///
/// let url = avatar_url("myemailaddress@example.com", None)?;
/// assert_eq!(
///     url,
///     "https://gravatar.com/avatar/84059b07d4be67b806386c0aad8070a23f18836bbaae342275dc0a83414c32ee"
/// );
///
/// let opts = AvatarOptions::new().size(80).rating(Rating::Pg);
/// let url = avatar_url("myemailaddress@example.com", Some(&opts))?;
/// assert!(url.ends_with("?s=80&r=pg"));
/// # Ok::<(), gravurl::GravurlError>(())
/// ```
pub fn avatar_url(email: &str, options: Option<&AvatarOptions>) -> Result<String, GravurlError> {
    avatar_url_with(&GravurlConfig::default(), &Sha256Hasher, email, options)
}
