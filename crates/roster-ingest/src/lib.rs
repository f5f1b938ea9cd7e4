//! Subscriber export ingestion.
//!
//! This crate reads MailChimp subscriber exports (CSV) into a
//! [`SourceTable`](roster_model::SourceTable): the header row plus every
//! record in file order.
//!
//! # Features
//!
//! - **Lossy decoding**: malformed UTF-8 bytes are dropped, never fatal
//! - **Header cleanup**: BOM and surrounding whitespace removed from names
//! - **Ragged rows**: short rows read as empty cells, extra cells are ignored
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::read_source_table;
//!
//! let table = read_source_table(Path::new("subscribed_members.csv"))?;
//! println!("{} columns, {} rows", table.headers.len(), table.row_count());
//! ```

mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{decode_lossy, ensure_input_exists, parse_source_table, read_source_table};
