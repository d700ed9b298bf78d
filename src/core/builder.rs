//! Reusable URL builder bundling configuration and hasher.

use crate::config::GravurlConfig;
use crate::core::avatar::avatar_url_with;
use crate::core::hasher::{IdentifierHasher, Sha256Hasher};
use crate::core::profile::profile_url_with;
use crate::error::GravurlError;
use crate::types::{AvatarOptions, ProfileExtra, ProfileFormat};

/// Builds avatar and profile URLs against a fixed configuration.
///
/// Holds no mutable state, so one instance can be shared across threads
/// whenever the hasher allows it.
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder<H = Sha256Hasher> {
    config: GravurlConfig,
    hasher: H,
}

impl UrlBuilder<Sha256Hasher> {
    /// Create a builder for the public service using SHA-256.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a SHA-256 builder with custom base URLs.
    pub fn with_config(config: GravurlConfig) -> Self {
        Self { config, hasher: Sha256Hasher }
    }
}

impl<H: IdentifierHasher> UrlBuilder<H> {
    /// Create a builder with a custom identifier hasher.
    pub fn with_hasher(config: GravurlConfig, hasher: H) -> Self {
        Self { config, hasher }
    }

    pub fn config(&self) -> &GravurlConfig {
        &self.config
    }

    /// Build the avatar image URL for an email address.
    pub fn avatar_url(&self, email: &str, options: Option<&AvatarOptions>) -> Result<String, GravurlError> {
        avatar_url_with(&self.config, &self.hasher, email, options)
    }

    /// Build the profile URL for an email address.
    pub fn profile_url(
        &self,
        email: &str,
        format: Option<ProfileFormat>,
        extra: Option<ProfileExtra>,
    ) -> Result<String, GravurlError> {
        profile_url_with(&self.config, &self.hasher, email, format, extra)
    }
}
