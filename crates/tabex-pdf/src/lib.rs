//! Minimal PDF document writer.
//!
//! This crate emits uncompressed PDF 1.4 documents built from a small page
//! model: filled rectangles, stroked lines, and Helvetica text runs with
//! WinAnsi encoding. It covers exactly what a paginated table report needs;
//! it is not a general-purpose PDF library.
//!
//! # Example
//!
//! ```
//! use tabex_pdf::{Color, Font, Page, PdfDocument, render_pdf};
//!
//! let mut page = Page::new(595.28, 841.89);
//! page.content.set_fill_color(Color::BLACK);
//! page.content.show_text(Font::HelveticaBold, 16.0, 40.0, 800.0, "Data Export");
//!
//! let mut doc = PdfDocument::new();
//! doc.title = Some("Data Export".to_string());
//! doc.add_page(page);
//!
//! let bytes = render_pdf(&doc).unwrap();
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! ```

mod content;
mod error;
mod types;
mod writer;

pub use content::{Content, approx_text_width};
pub use error::{PdfError, Result};
pub use types::{Color, Font, Page, PdfDocument};
pub use writer::{PdfWriter, render_pdf, write_pdf};
