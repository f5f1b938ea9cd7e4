//! CLI library components for the MailChimp to ConvertKit converter.

pub mod cli;
pub mod logging;
