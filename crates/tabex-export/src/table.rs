//! Table-to-export adapter.
//!
//! Synthesizes exporter inputs from a named table of plain text cells:
//! headers become column labels, and column keys are the stringified
//! zero-based column index, so exported records are keyed positionally.

use std::collections::BTreeMap;
use std::io::Read;

use serde_json::Value;

use crate::error::{ExportError, Result};
use crate::exporter::Exporter;
use crate::sink::FileSink;
use tabex_model::{ColumnDescriptor, ExportFormat, ExportOptions, Record};

/// One extracted table: header labels plus text rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a table from CSV input: first record is the header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Synthesize exporter inputs with positional keys.
    ///
    /// A row shorter than the header list leaves its trailing cells
    /// missing, which the cell rule renders as empty.
    pub fn to_export_inputs(&self) -> (Vec<Record>, Vec<ColumnDescriptor>) {
        let columns: Vec<ColumnDescriptor> = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, label)| ColumnDescriptor::new(idx.to_string(), label.clone()))
            .collect();

        let records: Vec<Record> = self
            .rows
            .iter()
            .map(|row| {
                let mut record = Record::new();
                for (idx, cell) in row.iter().enumerate() {
                    record.insert(idx.to_string(), Value::String(cell.clone()));
                }
                record
            })
            .collect();

        (records, columns)
    }
}

/// A set of named tables available for export.
#[derive(Debug, Clone, Default)]
pub struct TableDocument {
    tables: BTreeMap<String, TableData>,
}

impl TableDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table under an id, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, table: TableData) {
        self.tables.insert(id.into(), table);
    }

    /// Look up a table by id.
    pub fn get(&self, id: &str) -> Option<&TableData> {
        self.tables.get(id)
    }

    /// Registered table ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

/// Export a named table in the given format.
///
/// JSON is intentionally unsupported here: positional records carry no
/// meaningful keys, so a JSON dump of them would be misleading. An unknown
/// id fails before anything reaches the sink.
pub fn export_table<S: FileSink>(
    document: &TableDocument,
    id: &str,
    format: ExportFormat,
    exporter: &Exporter<S>,
    options: &ExportOptions,
) -> Result<()> {
    let table = document
        .get(id)
        .ok_or_else(|| ExportError::table_not_found(id))?;

    if format == ExportFormat::Json {
        return Err(ExportError::unsupported_format(format));
    }

    let (records, columns) = table.to_export_inputs();
    exporter.export(format, &records, &columns, options)
}
