//! Cell text coercion.
//!
//! Every tabular format (CSV, Excel CSV, PDF) renders record values through
//! the same rule: `null` and missing keys become the empty string — never
//! the literal "null" — scalars render in their display form, and composite
//! values are a typed serialization error rather than an opaque string.

use serde_json::Value;

use crate::error::{ExportError, Result};
use tabex_model::Record;

/// Project one column of a record to cell text.
pub fn cell_text(record: &Record, key: &str) -> Result<String> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Array(_)) => Err(ExportError::serialization(
            key,
            "array value cannot be rendered as a cell",
        )),
        Some(Value::Object(_)) => Err(ExportError::serialization(
            key,
            "object value cannot be rendered as a cell",
        )),
    }
}
