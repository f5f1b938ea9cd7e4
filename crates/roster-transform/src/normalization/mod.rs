//! Field normalizers for subscriber exports.
//!
//! This module provides pure functions for cleaning individual fields:
//! - **email**: syntactic email validation
//! - **name**: whitespace collapsing for first/last names
//! - **tags**: quote stripping, splitting and re-joining of tag lists

pub mod email;
pub mod name;
pub mod tags;

// Re-export commonly used items
pub use email::{EmailStatus, classify_email, is_valid_email};
pub use name::clean_name;
pub use tags::{STRIPPED_QUOTES, TAG_SEPARATORS, clean_tag_list, clean_tags};
