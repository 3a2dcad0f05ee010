//! Core types for the PDF page model.

use crate::content::Content;

/// One of the two standard fonts the writer embeds by reference.
///
/// Both are Type1 base fonts with WinAnsi encoding, so no font program is
/// carried in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// Resource name used in content streams (`/F1`, `/F2`).
    pub const fn resource_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    /// PostScript base font name.
    pub const fn base_font(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Build a color from 8-bit channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

/// A single page: size in points plus its content stream.
///
/// The PDF coordinate origin is the bottom-left corner; y grows upward.
#[derive(Debug, Clone)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub content: Content,
}

impl Page {
    /// Create an empty page of the given size in points.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            content: Content::new(),
        }
    }
}

/// A complete document ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct PdfDocument {
    /// Document title, written to the Info dictionary.
    pub title: Option<String>,
    pub pages: Vec<Page>,
}

impl PdfDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Number of pages.
    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rgb() {
        let c = Color::rgb(255, 0, 0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(Color::rgb(41, 128, 185).b, 185.0 / 255.0);
    }

    #[test]
    fn test_font_names() {
        assert_eq!(Font::Helvetica.resource_name(), "F1");
        assert_eq!(Font::HelveticaBold.base_font(), "Helvetica-Bold");
    }

    #[test]
    fn test_document_pages() {
        let mut doc = PdfDocument::new();
        assert_eq!(doc.num_pages(), 0);
        doc.add_page(Page::new(612.0, 792.0));
        assert_eq!(doc.num_pages(), 1);
    }
}
