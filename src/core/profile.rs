//! Profile URL construction.

use tracing::debug;
use url::Url;

use crate::config::GravurlConfig;
use crate::core::hasher::{IdentifierHasher, Sha256Hasher};
use crate::error::GravurlError;
use crate::types::{ProfileExtra, ProfileFormat};
use crate::url::utils::{append_path_suffix, join_identifier, set_query_param};

/// Compose a profile URL for an already-hashed identifier.
///
/// `extra` is only honored for `Json` + `Text` (JSONP callback) and
/// `QrCode` + `Number` (QR code size); every other combination drops it.
pub fn compose_profile_url(
    base: &Url,
    id: &str,
    format: Option<ProfileFormat>,
    extra: Option<&ProfileExtra>,
) -> Result<String, GravurlError> {
    let mut url = join_identifier(base, id)?;

    let Some(format) = format else {
        return Ok(url.into());
    };

    append_path_suffix(&mut url, &format!(".{}", format.suffix()));

    match (format, extra) {
        (ProfileFormat::Json, Some(ProfileExtra::Text(callback))) => {
            set_query_param(&mut url, "callback", callback);
        }
        (ProfileFormat::QrCode, Some(ProfileExtra::Number(size))) => {
            set_query_param(&mut url, "s", &size.to_string());
        }
        (_, Some(extra)) => {
            debug!(format = format.as_str(), ?extra, "ignoring extra not applicable to format");
        }
        (_, None) => {}
    }

    Ok(url.into())
}

/// Build a profile URL with a custom configuration and hasher.
pub fn profile_url_with<H: IdentifierHasher + ?Sized>(
    config: &GravurlConfig,
    hasher: &H,
    email: &str,
    format: Option<ProfileFormat>,
    extra: Option<ProfileExtra>,
) -> Result<String, GravurlError> {
    let id = hasher.hash(email)?;
    let url = compose_profile_url(config.profile_base(), &id, format, extra.as_ref())?;
    debug!(%url, "built profile url");
    Ok(url)
}

/// Build the profile URL for an email address.
///
/// # Examples
///
/// ```
/// use gravurl::{profile_url, ProfileFormat};
///
/// let url = profile_url("myemailaddress@example.com", Some(ProfileFormat::Json), Some("render".into()))?;
/// assert!(url.ends_with(".json?callback=render"));
///
/// let url = profile_url("myemailaddress@example.com", Some(ProfileFormat::QrCode), Some(100u32.into()))?;
/// assert!(url.ends_with(".qr?s=100"));
/// # Ok::<(), gravurl::GravurlError>(())
/// ```
pub fn profile_url(
    email: &str,
    format: Option<ProfileFormat>,
    extra: Option<ProfileExtra>,
) -> Result<String, GravurlError> {
    profile_url_with(&GravurlConfig::default(), &Sha256Hasher, email, format, extra)
}
