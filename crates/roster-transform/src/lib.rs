//! Subscriber export transformation crate.
//!
//! Turns MailChimp export rows into ConvertKit import rows.
//!
//! # Overview
//!
//! This crate provides:
//! - **Normalization functions**: email validation, name and tag cleaning
//! - **Analysis pass**: read-only statistics over an export
//! - **Conversion pass**: validation, deduplication and output writing
//!
//! Each pass resolves source columns once, owns its own counters and does its
//! own read of the input file.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_model::ConvertOptions;
//! use roster_transform::{analyze_export, convert_export};
//!
//! let input = Path::new("subscribed_members.csv");
//! let report = analyze_export(input)?;
//! let outcome = convert_export(input, &ConvertOptions::for_input(input))?;
//! assert_eq!(report.valid_emails, outcome.stats.valid_emails());
//! ```

mod analysis;
mod contact;
mod convert;
mod error;
mod redact;

pub mod normalization;

// Passes
pub use analysis::{TOP_TAG_LIMIT, analyze_export, analyze_table};
pub use convert::{ConversionOutcome, convert_export, convert_table};

// Row normalization
pub use contact::normalize_record;

// Error type
pub use error::{Result, TransformError};

// Row-level log redaction
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
