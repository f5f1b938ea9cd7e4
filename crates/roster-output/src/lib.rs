//! ConvertKit import file generation.
//!
//! Writes accepted contacts as a CSV with the fixed header
//! `Email,First Name,Last Name,Tags`. The header is written when the writer is
//! created, so an export with no accepted rows still yields a valid import file.
//! Rows are written as they arrive; a failure mid-run leaves a partial file.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{ContactWriter, ConvertKitRow, ensure_parent_dir};
