//! JSON serialization.

use crate::error::Result;
use tabex_model::Record;

/// Serialize the full record slice as pretty-printed JSON (2-space indent).
///
/// Column descriptors play no role here: all keys present on each record
/// are included unfiltered, and `null` values stay `null` rather than being
/// rewritten to empty strings.
pub fn build_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
