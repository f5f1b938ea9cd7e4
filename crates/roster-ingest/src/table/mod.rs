//! CSV reading utilities.

mod header;
mod reader;

pub use reader::{decode_lossy, ensure_input_exists, parse_source_table, read_source_table};
