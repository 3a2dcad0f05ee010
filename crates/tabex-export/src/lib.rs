//! Tabular export library.
//!
//! This crate converts generic tabular data — records plus an ordered
//! column-descriptor list — into downloadable artifacts in four formats:
//!
//! - **CSV**: comma-separated text with a deliberately narrow quoting rule
//! - **Excel CSV**: the same bytes behind a UTF-8 BOM prefix
//! - **JSON**: pretty-printed dump of the raw records
//! - **PDF**: a paginated table document
//!
//! Serialization is pure; delivery goes through a [`FileSink`], so the
//! same code serves a filesystem target and in-memory tests.
//!
//! # Example
//!
//! ```
//! use tabex_export::{Exporter, MemorySink};
//! use tabex_model::{ColumnDescriptor, ExportOptions, Record};
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), serde_json::json!("Ada"));
//! let columns = vec![ColumnDescriptor::new("name", "Name")];
//!
//! let sink = MemorySink::new();
//! let exporter = Exporter::new(sink.clone());
//! exporter.to_csv(&[record], &columns, &ExportOptions::new()).unwrap();
//!
//! assert_eq!(sink.artifacts()[0].bytes, b"Name\nAda".to_vec());
//! ```

pub mod cell;
mod controller;
pub mod csv;
mod error;
mod exporter;
pub mod json;
pub mod pdf;
mod sink;
mod table;
mod writer;

pub use controller::ExportController;
pub use error::{ExportError, Result};
pub use exporter::{Exporter, build_artifact};
pub use sink::{DirectorySink, FileSink, MemorySink};
pub use table::{TableData, TableDocument, export_table};
pub use writer::{
    ExportHandle, ExportJob, ExportResult, ExportStep, ExportUpdate, spawn_export,
};
