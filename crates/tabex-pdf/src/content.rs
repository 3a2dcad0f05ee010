//! Content stream construction.
//!
//! A [`Content`] accumulates PDF graphics operators as raw stream bytes.
//! Streams are written uncompressed so the operators (and any shown text)
//! remain inspectable in the output file.

use crate::types::{Color, Font};

/// Average glyph advance for Helvetica, as a fraction of the font size.
///
/// Good enough for column truncation; exact metrics would need the AFM
/// width tables.
const AVG_GLYPH_ADVANCE: f32 = 0.5;

/// Approximate rendered width of `text` at `size` points.
pub fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_ADVANCE
}

/// Builder for one page's content stream.
#[derive(Debug, Clone, Default)]
pub struct Content {
    buf: Vec<u8>,
}

impl Content {
    /// Create an empty content stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the non-stroking (fill) color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.push_line(&format!(
            "{} {} {} rg",
            fmt_num(color.r),
            fmt_num(color.g),
            fmt_num(color.b)
        ));
    }

    /// Set the stroking color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.push_line(&format!(
            "{} {} {} RG",
            fmt_num(color.r),
            fmt_num(color.g),
            fmt_num(color.b)
        ));
    }

    /// Set the stroke line width in points.
    pub fn set_line_width(&mut self, width: f32) {
        self.push_line(&format!("{} w", fmt_num(width)));
    }

    /// Fill a rectangle with the current fill color.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push_line(&format!(
            "{} {} {} {} re f",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height)
        ));
    }

    /// Stroke a rectangle outline with the current stroke color.
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push_line(&format!(
            "{} {} {} {} re S",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height)
        ));
    }

    /// Stroke a line segment with the current stroke color.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push_line(&format!(
            "{} {} m {} {} l S",
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2)
        ));
    }

    /// Show a text run at `(x, y)` (baseline) in the given font and size,
    /// using the current fill color.
    pub fn show_text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.buf.extend_from_slice(b"BT\n");
        self.push_line(&format!("/{} {} Tf", font.resource_name(), fmt_num(size)));
        self.push_line(&format!("{} {} Td", fmt_num(x), fmt_num(y)));
        self.buf.extend_from_slice(b"(");
        self.buf.extend_from_slice(&encode_literal(text));
        self.buf.extend_from_slice(b") Tj\n");
        self.buf.extend_from_slice(b"ET\n");
    }

    /// Finished stream bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Stream length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when no operators have been emitted.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn push_line(&mut self, op: &str) {
        self.buf.extend_from_slice(op.as_bytes());
        self.buf.push(b'\n');
    }
}

/// Encode a string as a PDF literal string body.
///
/// Parentheses and backslashes are escaped; characters above U+00FF have no
/// WinAnsi slot and degrade to `?`.
pub(crate) fn encode_literal(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => out.extend_from_slice(b"\\("),
            ')' => out.extend_from_slice(b"\\)"),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if (c as u32) <= 0xFF => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Format a coordinate or color component without trailing zeros.
fn fmt_num(value: f32) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        let mut s = format!("{value:.3}");
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(595.28), "595.28");
        assert_eq!(fmt_num(0.5), "0.5");
    }

    #[test]
    fn test_encode_literal_escapes() {
        assert_eq!(encode_literal("a(b)c"), b"a\\(b\\)c".to_vec());
        assert_eq!(encode_literal("a\\b"), b"a\\\\b".to_vec());
        assert_eq!(encode_literal("line\nbreak"), b"line\\nbreak".to_vec());
    }

    #[test]
    fn test_encode_literal_latin1_and_beyond() {
        // é is U+00E9, representable as a single byte
        assert_eq!(encode_literal("é"), vec![0xE9]);
        // CJK has no WinAnsi slot
        assert_eq!(encode_literal("漢"), b"?".to_vec());
    }

    #[test]
    fn test_show_text_structure() {
        let mut content = Content::new();
        content.show_text(Font::Helvetica, 10.0, 40.0, 700.0, "hello");
        let text = String::from_utf8(content.bytes().to_vec()).unwrap();
        assert!(text.contains("BT"));
        assert!(text.contains("/F1 10 Tf"));
        assert!(text.contains("40 700 Td"));
        assert!(text.contains("(hello) Tj"));
        assert!(text.ends_with("ET\n"));
    }

    #[test]
    fn test_rect_ops() {
        let mut content = Content::new();
        content.set_fill_color(Color::rgb(255, 255, 255));
        content.fill_rect(0.0, 0.0, 100.0, 50.0);
        let text = String::from_utf8(content.bytes().to_vec()).unwrap();
        assert!(text.contains("1 1 1 rg"));
        assert!(text.contains("0 0 100 50 re f"));
    }

    #[test]
    fn test_approx_text_width_scales() {
        let narrow = approx_text_width("ab", 10.0);
        let wide = approx_text_width("abcd", 10.0);
        assert_eq!(wide, narrow * 2.0);
        assert_eq!(approx_text_width("", 10.0), 0.0);
    }
}
