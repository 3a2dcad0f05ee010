//! CSV and Excel-flavoured CSV serialization.
//!
//! The quoting rule is deliberately narrower than RFC 4180: a cell is
//! quote-wrapped (with internal quotes doubled) if and only if it contains
//! a comma or a double quote. Newlines, semicolons, and surrounding
//! whitespace do not trigger quoting. Existing consumers depend on these
//! exact bytes, so the locked tests below keep the rule from drifting.

use std::borrow::Cow;

use crate::cell::cell_text;
use crate::error::Result;
use tabex_model::{ColumnDescriptor, Record};

/// UTF-8 byte-order mark prepended to Excel-flavoured CSV.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Apply the narrow escaping rule to one cell.
pub fn escape_cell(text: &str) -> Cow<'_, str> {
    if text.contains(',') || text.contains('"') {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}

/// Build CSV text: a header row of column labels, then one row per record
/// in descriptor order. Rows are joined with `\n` and there is no trailing
/// newline.
pub fn build_csv(records: &[Record], columns: &[ColumnDescriptor]) -> Result<String> {
    let mut rows = Vec::with_capacity(records.len() + 1);

    let header: Vec<String> = columns
        .iter()
        .map(|col| escape_cell(&col.label).into_owned())
        .collect();
    rows.push(header.join(","));

    for record in records {
        let mut cells = Vec::with_capacity(columns.len());
        for col in columns {
            let text = cell_text(record, &col.key)?;
            cells.push(escape_cell(&text).into_owned());
        }
        rows.push(cells.join(","));
    }

    Ok(rows.join("\n"))
}

/// Build Excel-flavoured CSV: the same bytes as [`build_csv`] prefixed with
/// the UTF-8 BOM so spreadsheet applications that sniff encoding render
/// extended characters correctly.
pub fn build_excel_csv(records: &[Record], columns: &[ColumnDescriptor]) -> Result<Vec<u8>> {
    let body = build_csv(records, columns)?;
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
    bytes.extend_from_slice(&UTF8_BOM);
    bytes.extend_from_slice(body.as_bytes());
    Ok(bytes)
}
