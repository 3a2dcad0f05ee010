//! PDF file writer.
//!
//! Assembles the object table, cross-reference table, and trailer around
//! the rendered page content streams.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::content::encode_literal;
use crate::error::{PdfError, Result};
use crate::types::{Font, Page, PdfDocument};

/// Fixed object numbers for the document skeleton. Page and content
/// objects follow in pairs.
const OBJ_CATALOG: usize = 1;
const OBJ_PAGES: usize = 2;
const OBJ_FONT_REGULAR: usize = 3;
const OBJ_FONT_BOLD: usize = 4;
const OBJ_INFO: usize = 5;
const FIRST_PAGE_OBJ: usize = 6;

/// PDF file writer.
///
/// Renders the whole document in memory (the cross-reference table needs
/// final byte offsets) and writes it out in one pass.
pub struct PdfWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> PdfWriter<W> {
    /// Create a new PDF writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Render and write a document.
    pub fn write_document(mut self, document: &PdfDocument) -> Result<()> {
        let bytes = render_pdf(document)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl PdfWriter<File> {
    /// Create a PDF file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// Write a document to a PDF file.
///
/// Convenience wrapper that creates the file and writes the document.
pub fn write_pdf(path: &Path, document: &PdfDocument) -> Result<()> {
    PdfWriter::create(path)?.write_document(document)
}

/// Render a document to PDF bytes.
pub fn render_pdf(document: &PdfDocument) -> Result<Vec<u8>> {
    validate_document(document)?;

    let mut out = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    // Binary comment line after the header marks the file as non-text.
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    write_catalog(&mut out, &mut offsets);
    write_pages(&mut out, &mut offsets, document.pages.len());
    write_font(&mut out, &mut offsets, Font::Helvetica);
    write_font(&mut out, &mut offsets, Font::HelveticaBold);
    write_info(&mut out, &mut offsets, document.title.as_deref());

    for (idx, page) in document.pages.iter().enumerate() {
        write_page(&mut out, &mut offsets, page, idx);
        write_content(&mut out, &mut offsets, page, idx);
    }

    write_xref_and_trailer(&mut out, &offsets);
    Ok(out)
}

fn validate_document(document: &PdfDocument) -> Result<()> {
    if document.pages.is_empty() {
        return Err(PdfError::EmptyDocument);
    }
    for page in &document.pages {
        let valid = page.width.is_finite()
            && page.height.is_finite()
            && page.width > 0.0
            && page.height > 0.0;
        if !valid {
            return Err(PdfError::InvalidPageSize {
                width: page.width,
                height: page.height,
            });
        }
    }
    Ok(())
}

fn begin_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, number: usize) {
    debug_assert_eq!(offsets.len() + 1, number, "objects must be emitted in order");
    offsets.push(out.len());
    out.extend_from_slice(format!("{number} 0 obj\n").as_bytes());
}

fn end_object(out: &mut Vec<u8>) {
    out.extend_from_slice(b"endobj\n");
}

fn write_catalog(out: &mut Vec<u8>, offsets: &mut Vec<usize>) {
    begin_object(out, offsets, OBJ_CATALOG);
    out.extend_from_slice(format!("<< /Type /Catalog /Pages {OBJ_PAGES} 0 R >>\n").as_bytes());
    end_object(out);
}

fn write_pages(out: &mut Vec<u8>, offsets: &mut Vec<usize>, page_count: usize) {
    begin_object(out, offsets, OBJ_PAGES);
    let kids: Vec<String> = (0..page_count)
        .map(|idx| format!("{} 0 R", FIRST_PAGE_OBJ + idx * 2))
        .collect();
    out.extend_from_slice(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {page_count} >>\n",
            kids.join(" ")
        )
        .as_bytes(),
    );
    end_object(out);
}

fn write_font(out: &mut Vec<u8>, offsets: &mut Vec<usize>, font: Font) {
    let number = match font {
        Font::Helvetica => OBJ_FONT_REGULAR,
        Font::HelveticaBold => OBJ_FONT_BOLD,
    };
    begin_object(out, offsets, number);
    out.extend_from_slice(
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\n",
            font.base_font()
        )
        .as_bytes(),
    );
    end_object(out);
}

fn write_info(out: &mut Vec<u8>, offsets: &mut Vec<usize>, title: Option<&str>) {
    begin_object(out, offsets, OBJ_INFO);
    out.extend_from_slice(b"<< ");
    if let Some(title) = title {
        out.extend_from_slice(b"/Title (");
        out.extend_from_slice(&encode_literal(title));
        out.extend_from_slice(b") ");
    }
    let created = chrono::Local::now().format("D:%Y%m%d%H%M%S");
    out.extend_from_slice(format!("/Producer (tabex) /CreationDate ({created}) >>\n").as_bytes());
    end_object(out);
}

fn write_page(out: &mut Vec<u8>, offsets: &mut Vec<usize>, page: &Page, idx: usize) {
    let number = FIRST_PAGE_OBJ + idx * 2;
    let content_number = number + 1;
    begin_object(out, offsets, number);
    out.extend_from_slice(
        format!(
            "<< /Type /Page /Parent {OBJ_PAGES} 0 R \
             /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 {OBJ_FONT_REGULAR} 0 R /F2 {OBJ_FONT_BOLD} 0 R >> >> \
             /Contents {content_number} 0 R >>\n",
            page.width, page.height
        )
        .as_bytes(),
    );
    end_object(out);
}

fn write_content(out: &mut Vec<u8>, offsets: &mut Vec<usize>, page: &Page, idx: usize) {
    let number = FIRST_PAGE_OBJ + idx * 2 + 1;
    begin_object(out, offsets, number);
    out.extend_from_slice(format!("<< /Length {} >>\nstream\n", page.content.len()).as_bytes());
    out.extend_from_slice(page.content.bytes());
    out.extend_from_slice(b"endstream\n");
    end_object(out);
}

fn write_xref_and_trailer(out: &mut Vec<u8>, offsets: &[usize]) {
    let xref_start = out.len();
    let size = offsets.len() + 1;

    out.extend_from_slice(format!("xref\n0 {size}\n").as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }

    out.extend_from_slice(
        format!("trailer\n<< /Size {size} /Root {OBJ_CATALOG} 0 R /Info {OBJ_INFO} 0 R >>\n")
            .as_bytes(),
    );
    out.extend_from_slice(format!("startxref\n{xref_start}\n%%EOF\n").as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Font};

    fn sample_document() -> PdfDocument {
        let mut page = Page::new(595.28, 841.89);
        page.content.set_fill_color(Color::BLACK);
        page.content
            .show_text(Font::HelveticaBold, 16.0, 40.0, 800.0, "Title");
        let mut doc = PdfDocument::new();
        doc.title = Some("Title".to_string());
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_render_structure() {
        let bytes = render_pdf(&sample_document()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("(Title) Tj"));
        assert!(text.contains("startxref"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_render_empty_document_fails() {
        let doc = PdfDocument::new();
        assert!(matches!(render_pdf(&doc), Err(PdfError::EmptyDocument)));
    }

    #[test]
    fn test_render_invalid_page_size() {
        let mut doc = PdfDocument::new();
        doc.add_page(Page::new(0.0, 842.0));
        assert!(matches!(
            render_pdf(&doc),
            Err(PdfError::InvalidPageSize { .. })
        ));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = render_pdf(&sample_document()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        let xref_pos = text.find("xref\n").unwrap();
        let entries: Vec<&str> = text[xref_pos..]
            .lines()
            .skip(2) // "xref" and the "0 n" subsection line
            .take_while(|line| line.ends_with("n ") || line.ends_with("f "))
            .collect();
        // First entry is the free-list head; each later entry must point at
        // an "N 0 obj" line.
        for (number, entry) in entries.iter().enumerate().skip(1) {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{number} 0 obj");
            assert!(
                bytes[offset..].starts_with(expected.as_bytes()),
                "object {number} offset mismatch"
            );
        }
    }

    #[test]
    fn test_write_pdf_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        write_pdf(&path, &sample_document()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_multi_page_kids() {
        let mut doc = sample_document();
        doc.add_page(Page::new(595.28, 841.89));
        let bytes = render_pdf(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/Kids [6 0 R 8 0 R]"));
    }
}
