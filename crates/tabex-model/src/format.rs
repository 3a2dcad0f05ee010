//! Export format selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target serialization format for an export.
///
/// Dispatch on this enum is exhaustive; there is no runtime string
/// branching on format names anywhere in the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain comma-separated values.
    Csv,
    /// CSV with a UTF-8 byte-order-mark prefix so spreadsheet applications
    /// that sniff encoding render extended characters correctly.
    Excel,
    /// Pretty-printed JSON dump of the records.
    Json,
    /// Paginated PDF table.
    Pdf,
}

impl ExportFormat {
    /// All formats, in listing order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Excel,
        ExportFormat::Json,
        ExportFormat::Pdf,
    ];

    /// File extension for the format.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv | Self::Excel => "csv",
            Self::Json => "json",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type of the produced artifact.
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Csv | Self::Excel => "text/csv",
            Self::Json => "application/json",
            Self::Pdf => "application/pdf",
        }
    }

    /// Default artifact filename when the caller supplies none.
    pub fn default_filename(&self) -> String {
        format!("export.{}", self.extension())
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::Json => "json",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            "json" => Ok(Self::Json),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_and_mimes() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Excel.extension(), "csv");
        assert_eq!(ExportFormat::Json.mime(), "application/json");
        assert_eq!(ExportFormat::Pdf.mime(), "application/pdf");
    }

    #[test]
    fn default_filenames() {
        assert_eq!(ExportFormat::Csv.default_filename(), "export.csv");
        assert_eq!(ExportFormat::Excel.default_filename(), "export.csv");
        assert_eq!(ExportFormat::Json.default_filename(), "export.json");
        assert_eq!(ExportFormat::Pdf.default_filename(), "export.pdf");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!(
            " excel ".parse::<ExportFormat>().unwrap(),
            ExportFormat::Excel
        );
        assert!("docx".parse::<ExportFormat>().is_err());
    }
}
