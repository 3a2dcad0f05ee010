//! Per-export configuration options.

use serde::{Deserialize, Serialize};

use crate::format::ExportFormat;

/// Page orientation. PDF output only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Physical page size. PDF output only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    /// Page dimensions in PDF points as (width, height) for portrait
    /// orientation.
    pub const fn dimensions(&self) -> (f32, f32) {
        match self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
        }
    }
}

/// Options accepted by every export operation.
///
/// All fields are optional with fixed defaults; `title`, `orientation` and
/// `format` only affect PDF output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Artifact filename. Defaults to `export.<ext>` for the target format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Document heading. PDF only; defaults to "Data Export".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page orientation. PDF only.
    #[serde(default)]
    pub orientation: Orientation,
    /// Page size. PDF only.
    #[serde(default)]
    pub format: PageFormat,
}

/// Default document heading for PDF output.
pub const DEFAULT_TITLE: &str = "Data Export";

impl ExportOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artifact filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the PDF document heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the PDF page orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the PDF page size.
    #[must_use]
    pub fn with_page_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    /// Resolve the artifact filename for the given format.
    pub fn resolved_filename(&self, format: ExportFormat) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| format.default_filename())
    }

    /// Resolve the PDF document heading.
    pub fn resolved_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Page dimensions in points with orientation applied.
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.format.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_defaults() {
        let options = ExportOptions::new();
        assert_eq!(options.resolved_filename(ExportFormat::Csv), "export.csv");
        assert_eq!(options.resolved_filename(ExportFormat::Pdf), "export.pdf");
        assert_eq!(options.resolved_title(), "Data Export");
        assert_eq!(options.orientation, Orientation::Portrait);
        assert_eq!(options.format, PageFormat::A4);
    }

    #[test]
    fn explicit_filename_wins() {
        let options = ExportOptions::new().with_filename("roster.csv");
        assert_eq!(options.resolved_filename(ExportFormat::Csv), "roster.csv");
    }

    #[test]
    fn landscape_swaps_dimensions() {
        let options = ExportOptions::new().with_orientation(Orientation::Landscape);
        let (w, h) = options.page_dimensions();
        assert!(w > h);
        assert_eq!((h, w), PageFormat::A4.dimensions());
    }
}
