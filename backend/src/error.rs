//! Error types for the Khoroga ingestion pipeline.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`CsvError`] - Reading and decoding the source CSV
//! - [`StoreError`] - Building the in-memory place store
//! - [`ExportError`] - Writing the static dataset artifact
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Note what is deliberately NOT an error: malformed quoting, unknown
//! headers, and nameless rows are all tolerated by the lenient parser and
//! never surface here. A missing source file, on the other hand, is fatal;
//! there is no fallback dataset.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or decoding the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the source file.
    #[error("Failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// Byte content could not be decoded to text.
    #[error("Failed to decode CSV content: {0}")]
    Decode(String),
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors while building the place store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// CSV reading/decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// The global store was initialized with a different source file.
    #[error("Store already initialized from '{0}'")]
    AlreadyInitialized(String),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing the static dataset artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Store build error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Failed to write the output file.
    #[error("Failed to write dataset: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> StoreError
        let csv_err = CsvError::Decode("bad bytes".into());
        let store_err: StoreError = csv_err.into();
        assert!(store_err.to_string().contains("bad bytes"));

        // StoreError -> ExportError
        let export_err: ExportError = store_err.into();
        assert!(export_err.to_string().contains("CSV error"));
    }

    #[test]
    fn test_missing_file_is_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CsvError::from(io);
        assert!(err.to_string().contains("Failed to read CSV file"));
    }
}
