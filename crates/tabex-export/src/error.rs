//! Error types for export operations.

use thiserror::Error;

use tabex_model::ExportFormat;
use tabex_pdf::PdfError;

/// Errors that can occur when building or delivering an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The delivery environment is unusable (e.g. the sink's target
    /// directory cannot be created).
    #[error("export environment unavailable: {message}")]
    Environment { message: String },

    /// Table adapter invoked with an unknown table id.
    #[error("table not found: {id}")]
    TableNotFound { id: String },

    /// The entry point does not support the requested format.
    #[error("format '{format}' is not supported by this entry point")]
    UnsupportedFormat { format: ExportFormat },

    /// A record value cannot be coerced to cell text.
    #[error("cannot serialize column '{column}': {message}")]
    Serialization { column: String, message: String },

    /// A controller export is already in flight.
    #[error("an export is already in flight")]
    Busy,

    /// The export was cancelled before completion.
    #[error("export cancelled")]
    Cancelled,

    /// CSV input could not be read.
    #[error("CSV input error: {0}")]
    CsvInput(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PDF rendering error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create an Environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    /// Create a TableNotFound error.
    pub fn table_not_found(id: impl Into<String>) -> Self {
        Self::TableNotFound { id: id.into() }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(format: ExportFormat) -> Self {
        Self::UnsupportedFormat { format }
    }

    /// Create a Serialization error for a column.
    pub fn serialization(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            column: column.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::table_not_found("scores");
        assert_eq!(format!("{err}"), "table not found: scores");

        let err = ExportError::unsupported_format(ExportFormat::Json);
        assert!(format!("{err}").contains("'json'"));

        let err = ExportError::serialization("tags", "composite value");
        assert!(format!("{err}").contains("column 'tags'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
