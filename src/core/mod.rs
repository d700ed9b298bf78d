//! Core hashing and URL building functionality.
//!
//! This module contains the main operations:
//! - Hashing email addresses into identifiers
//! - Building avatar URLs from display options
//! - Building profile URLs for a given format
//! - A reusable builder bundling configuration and hasher

pub mod hasher;
pub mod avatar;
pub mod profile;
pub mod builder;

// Re-export main functionality
pub use hasher::{hash_email, IdentifierHasher, Sha256Hasher, IDENTIFIER_LEN};
pub use avatar::{avatar_url, avatar_url_with, compose_avatar_url, AVATAR_EXTENSION};
pub use profile::{profile_url, profile_url_with, compose_profile_url};
pub use builder::UrlBuilder;
