//! URL manipulation utilities.
//!
//! This module contains the URL operations the builders compose:
//! - Identifier path joining
//! - Query parameter replacement
//! - Path suffix handling
//! - Scheme stripping for protocol-agnostic URLs
//! - Query and path inspection

pub mod utils;

// Re-export main functionality
pub use utils::{
    join_identifier, set_query_param, append_path_suffix, strip_scheme, parse_query,
    get_query_value, get_path_segments, is_scheme_relative
};
