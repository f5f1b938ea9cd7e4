//! Error types for the analysis and conversion passes.

use roster_ingest::IngestError;
use roster_output::OutputError;
use thiserror::Error;

/// Whole-file failures. Row-level problems are counted, never returned.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl TransformError {
    /// Returns true when the input file was missing.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Self::Ingest(err) if err.is_not_found())
    }
}

/// Result type for transformation passes.
pub type Result<T> = std::result::Result<T, TransformError>;
