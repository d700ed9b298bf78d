//! Base URL configuration for the builders.

use url::Url;

use crate::error::GravurlError;
use crate::types::{AVATAR_BASE_URL, PROFILE_BASE_URL};

/// Origins the avatar and profile URLs are built on.
///
/// The default points at the public service. Overrides are useful for
/// self-hosted mirrors or caching proxies that expose the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravurlConfig {
    avatar_base: Url,
    profile_base: Url,
}

impl GravurlConfig {
    /// Override the avatar base URL (e.g. `https://mirror.example/avatar`).
    pub fn with_avatar_base(mut self, base: &str) -> Result<Self, GravurlError> {
        self.avatar_base = parse_base(base)?;
        Ok(self)
    }

    /// Override the profile base URL.
    pub fn with_profile_base(mut self, base: &str) -> Result<Self, GravurlError> {
        self.profile_base = parse_base(base)?;
        Ok(self)
    }

    pub fn avatar_base(&self) -> &Url {
        &self.avatar_base
    }

    pub fn profile_base(&self) -> &Url {
        &self.profile_base
    }
}

impl Default for GravurlConfig {
    fn default() -> Self {
        Self {
            avatar_base: Url::parse(AVATAR_BASE_URL).unwrap(),
            profile_base: Url::parse(PROFILE_BASE_URL).unwrap(),
        }
    }
}

fn parse_base(base: &str) -> Result<Url, GravurlError> {
    let url = Url::parse(base)?;
    match url.scheme() {
        "https" | "http" => {}
        _ => return Err(GravurlError::InvalidScheme),
    }
    // The builders own the query string and the end of the path
    if url.query().is_some() || url.fragment().is_some() || url.cannot_be_a_base() {
        return Err(GravurlError::InvalidBaseUrl);
    }
    Ok(url)
}
