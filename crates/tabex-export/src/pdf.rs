//! PDF table layout.
//!
//! Builds a paginated table document: a title line at a fixed top offset on
//! the first page, then a grid-bordered table whose header band repeats on
//! every page. Styling is fixed — body font 10pt with 3pt cell padding,
//! header band in the brand fill with white bold text.

use crate::cell::cell_text;
use crate::error::Result;
use tabex_model::{ColumnDescriptor, ExportOptions, Record};
use tabex_pdf::{Color, Content, Font, Page, PdfDocument, approx_text_width, render_pdf};

const MARGIN: f32 = 40.0;
const TITLE_SIZE: f32 = 16.0;
/// Gap between the title baseline and the top of the table.
const TITLE_GAP: f32 = 24.0;
const BODY_SIZE: f32 = 10.0;
const CELL_PADDING: f32 = 3.0;
const ROW_HEIGHT: f32 = BODY_SIZE + 2.0 * CELL_PADDING;

/// Brand fill for the header band.
const HEADER_FILL: Color = Color::rgb(41, 128, 185);
/// Grid line color.
const GRID_COLOR: Color = Color::rgb(189, 195, 199);

/// Build a paginated PDF table artifact.
pub fn build_pdf(
    records: &[Record],
    columns: &[ColumnDescriptor],
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let (page_w, page_h) = options.page_dimensions();
    let widths = column_widths(columns, page_w - 2.0 * MARGIN);

    let mut doc = PdfDocument::new();
    doc.title = Some(options.resolved_title().to_string());

    let mut page = Page::new(page_w, page_h);

    // Title baseline sits a fixed offset below the top edge of page one.
    let title_y = page_h - MARGIN;
    page.content.set_fill_color(Color::BLACK);
    page.content.show_text(
        Font::HelveticaBold,
        TITLE_SIZE,
        MARGIN,
        title_y,
        options.resolved_title(),
    );

    let mut y = title_y - TITLE_GAP;
    if !columns.is_empty() {
        draw_header_row(&mut page.content, columns, &widths, y);
        y -= ROW_HEIGHT;

        for record in records {
            if y - ROW_HEIGHT < MARGIN {
                doc.add_page(page);
                page = Page::new(page_w, page_h);
                y = page_h - MARGIN;
                draw_header_row(&mut page.content, columns, &widths, y);
                y -= ROW_HEIGHT;
            }

            let mut x = MARGIN;
            page.content.set_fill_color(Color::BLACK);
            for (col, width) in columns.iter().zip(widths.iter()) {
                let text = cell_text(record, &col.key)?;
                draw_cell(&mut page.content, &text, Font::Helvetica, x, y, *width);
                x += width;
            }
            y -= ROW_HEIGHT;
        }
    }

    doc.add_page(page);
    Ok(render_pdf(&doc)?)
}

/// Resolve per-column widths within the usable width.
///
/// Advisory descriptor widths are respected proportionally; columns without
/// one share the average. The result always sums to the usable width.
fn column_widths(columns: &[ColumnDescriptor], usable: f32) -> Vec<f32> {
    if columns.is_empty() {
        return Vec::new();
    }
    let average = usable / columns.len() as f32;
    let raw: Vec<f32> = columns
        .iter()
        .map(|col| col.width.filter(|w| *w > 0.0).unwrap_or(average))
        .collect();
    let total: f32 = raw.iter().sum();
    raw.iter().map(|w| w / total * usable).collect()
}

/// Draw the header band: brand fill across the row, white bold labels,
/// grid strokes.
fn draw_header_row(content: &mut Content, columns: &[ColumnDescriptor], widths: &[f32], y: f32) {
    let total: f32 = widths.iter().sum();
    content.set_fill_color(HEADER_FILL);
    content.fill_rect(MARGIN, y - ROW_HEIGHT, total, ROW_HEIGHT);

    content.set_fill_color(Color::WHITE);
    let mut x = MARGIN;
    for (col, width) in columns.iter().zip(widths.iter()) {
        draw_cell(content, &col.label, Font::HelveticaBold, x, y, *width);
        x += width;
    }
}

/// Draw one cell: grid border plus padded, truncated text.
fn draw_cell(content: &mut Content, text: &str, font: Font, x: f32, y: f32, width: f32) {
    content.set_stroke_color(GRID_COLOR);
    content.set_line_width(0.5);
    content.stroke_rect(x, y - ROW_HEIGHT, width, ROW_HEIGHT);

    let fitted = truncate_to_width(text, width - 2.0 * CELL_PADDING);
    if !fitted.is_empty() {
        content.show_text(
            font,
            BODY_SIZE,
            x + CELL_PADDING,
            y - ROW_HEIGHT + CELL_PADDING + 1.0,
            &fitted,
        );
    }
}

/// Truncate text so its approximate rendered width fits the cell.
fn truncate_to_width(text: &str, max_width: f32) -> String {
    if approx_text_width(text, BODY_SIZE) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if approx_text_width(&out, BODY_SIZE) > max_width {
            out.pop();
            break;
        }
    }
    out
}
