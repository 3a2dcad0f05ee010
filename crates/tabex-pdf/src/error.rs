//! Error types for PDF writing.

use thiserror::Error;

/// Errors that can occur when rendering or writing PDF documents.
#[derive(Debug, Error)]
pub enum PdfError {
    /// Document has no pages.
    #[error("document has no pages")]
    EmptyDocument,

    /// Page dimensions must be finite and positive.
    #[error("invalid page size: {width} x {height}")]
    InvalidPageSize { width: f32, height: f32 },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
