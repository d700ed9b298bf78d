//! Email identifier hashing using SHA-256.

use sha2::{Digest, Sha256};
use crate::error::GravurlError;

/// Length of a SHA-256 identifier in hex characters.
pub const IDENTIFIER_LEN: usize = 64;

/// Turns an email address into the identifier used as the URL path key.
///
/// Implementations must be deterministic and must not normalize the input;
/// callers that want trimming or lower-casing do it before hashing.
pub trait IdentifierHasher {
    /// Hash `input` into a lowercase hex string.
    fn hash(&self, input: &str) -> Result<String, GravurlError>;
}

/// SHA-256 identifier hasher, the digest the avatar service expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl IdentifierHasher for Sha256Hasher {
    fn hash(&self, input: &str) -> Result<String, GravurlError> {
        Ok(hash_email(input))
    }
}

/// Hash an email address with SHA-256 and hex-encode it (lowercase).
///
/// The input is hashed as raw bytes with no normalization.
///
/// # Examples
///
/// ```
/// use gravurl::hash_email;
///
/// assert_eq!(
///     hash_email("myemailaddress@example.com"),
///     "84059b07d4be67b806386c0aad8070a23f18836bbaae342275dc0a83414c32ee"
/// );
/// ```
pub fn hash_email(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
