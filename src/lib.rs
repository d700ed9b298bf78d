//! gravurl - Deterministic Gravatar avatar and profile URLs
//!
//! This crate turns an email address into ready-to-use Gravatar image and
//! profile URLs. The email is hashed with SHA-256 and the optional display
//! parameters are encoded as path and query components. No network request
//! is made.
//!
//! # Features
//!
//! - **Deterministic**: Same input always produces the same URL
//! - **Fixed option order**: Query parameters are emitted as `s`, `d`, `f`, `r`
//!   regardless of how the options were assembled
//! - **Permissive**: Unknown option keys and mismatched profile extras are ignored
//! - **Pluggable hashing**: Swap the identifier hasher through [`IdentifierHasher`]
//!
//! # Quick Start
//!
//! ```
//! use gravurl::{avatar_url, profile_url, AvatarOptions, DefaultImage, ProfileFormat, Protocol, Rating};
//!
//! let opts = AvatarOptions::new()
//!     .size(120)
//!     .rating(Rating::Pg)
//!     .default_image(DefaultImage::Identicon)
//!     .protocol(Protocol::Auto);
//! let avatar = avatar_url("myemailaddress@example.com", Some(&opts))?;
//! assert!(avatar.starts_with("//gravatar.com/avatar/"));
//!
//! let profile = profile_url("myemailaddress@example.com", Some(ProfileFormat::Vcf), None)?;
//! assert!(profile.ends_with(".vcf"));
//! # Ok::<(), gravurl::GravurlError>(())
//! ```
//!
//! # Avatar Options
//!
//! | Option              | URL effect           |
//! |---------------------|----------------------|
//! | `size`              | `s=<n>`              |
//! | `default_image`     | `d=<token or url>`   |
//! | `force_default`     | `f=y` when true      |
//! | `rating`            | `r=<g,pg,r,x>`       |
//! | `include_extension` | `.jpg` path suffix   |
//! | `protocol`          | `https`, `http`, `//`|
//!
//! # Error Handling
//!
//! All builders return `Result<String, GravurlError>`. With the default
//! configuration the only failure source is the identifier hasher, whose
//! error is returned unchanged.

// Re-export main building functions
pub use crate::core::{avatar_url, profile_url, UrlBuilder};

// Re-export lower-level building blocks
pub use crate::core::{avatar_url_with, profile_url_with, compose_avatar_url, compose_profile_url};
pub use crate::core::{hash_email, IdentifierHasher, Sha256Hasher, IDENTIFIER_LEN, AVATAR_EXTENSION};

// Re-export URL utilities
pub use crate::url::{
    join_identifier, set_query_param, append_path_suffix, strip_scheme,
    parse_query, get_query_value, get_path_segments, is_scheme_relative
};

// Re-export public types
pub use config::GravurlConfig;
pub use error::GravurlError;
pub use types::{
    AvatarOptions, DefaultImage, ProfileExtra, ProfileFormat, Protocol, Rating,
    AVATAR_BASE_URL, PROFILE_BASE_URL, PROTOCOLS, RATINGS, DEFAULT_IMAGES, PROFILE_FORMATS
};

// Module declarations
pub mod config;
pub mod error;
pub mod types;
pub mod core;
pub mod url;
