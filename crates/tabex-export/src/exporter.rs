//! The Exporter: pure serialization plus sink delivery.

use tracing::info;

use crate::csv::{build_csv, build_excel_csv};
use crate::error::Result;
use crate::json::build_json;
use crate::pdf::build_pdf;
use crate::sink::FileSink;
use tabex_model::{Artifact, ColumnDescriptor, ExportFormat, ExportOptions, Record};

/// Serialize records into an artifact for the given format.
///
/// Pure projection of `(records, columns, options)`: no I/O, no shared
/// state between calls, inputs never mutated. The JSON format ignores the
/// column list entirely.
pub fn build_artifact(
    format: ExportFormat,
    records: &[Record],
    columns: &[ColumnDescriptor],
    options: &ExportOptions,
) -> Result<Artifact> {
    let bytes = match format {
        ExportFormat::Csv => build_csv(records, columns)?.into_bytes(),
        ExportFormat::Excel => build_excel_csv(records, columns)?,
        ExportFormat::Json => build_json(records)?.into_bytes(),
        ExportFormat::Pdf => build_pdf(records, columns, options)?,
    };
    Ok(Artifact::new(
        format,
        options.resolved_filename(format),
        bytes,
    ))
}

/// Converts tabular data to a serialization format and delivers the result
/// through the configured sink.
pub struct Exporter<S: FileSink> {
    sink: S,
}

impl<S: FileSink> Exporter<S> {
    /// Create an exporter delivering through `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Access the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Export in the given format.
    pub fn export(
        &self,
        format: ExportFormat,
        records: &[Record],
        columns: &[ColumnDescriptor],
        options: &ExportOptions,
    ) -> Result<()> {
        let artifact = build_artifact(format, records, columns, options)?;
        self.sink.write(&artifact)?;
        info!(
            %format,
            rows = records.len(),
            bytes = artifact.len(),
            filename = %artifact.filename,
            "export complete"
        );
        Ok(())
    }

    /// Export as plain CSV.
    pub fn to_csv(
        &self,
        records: &[Record],
        columns: &[ColumnDescriptor],
        options: &ExportOptions,
    ) -> Result<()> {
        self.export(ExportFormat::Csv, records, columns, options)
    }

    /// Export as Excel-flavoured CSV (UTF-8 BOM prefix).
    pub fn to_excel(
        &self,
        records: &[Record],
        columns: &[ColumnDescriptor],
        options: &ExportOptions,
    ) -> Result<()> {
        self.export(ExportFormat::Excel, records, columns, options)
    }

    /// Export the raw records as pretty-printed JSON.
    pub fn to_json(&self, records: &[Record], options: &ExportOptions) -> Result<()> {
        self.export(ExportFormat::Json, records, &[], options)
    }

    /// Export as a paginated PDF table.
    pub fn to_pdf(
        &self,
        records: &[Record],
        columns: &[ColumnDescriptor],
        options: &ExportOptions,
    ) -> Result<()> {
        self.export(ExportFormat::Pdf, records, columns, options)
    }
}
