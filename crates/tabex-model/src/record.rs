//! Records and column descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of exportable data: an opaque string-keyed mapping to arbitrary
/// scalar values. A key absent from the map is equivalent to a `null` value.
///
/// No schema is enforced beyond the column descriptor list handed to an
/// export call; the map's own key order never influences output.
pub type Record = serde_json::Map<String, Value>;

/// Metadata selecting and labeling one field of a [`Record`] for export.
///
/// The order of the descriptor list passed to an export determines the
/// output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Selector into the record.
    pub key: String,
    /// Display header for the column.
    pub label: String,
    /// Advisory column width in page units. PDF layout only; other formats
    /// ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl ColumnDescriptor {
    /// Create a descriptor with no advisory width.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
        }
    }

    /// Set an advisory width for PDF layout.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}
