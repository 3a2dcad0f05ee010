//! Command implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use crossbeam_channel::unbounded;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info_span};

use tabex_export::{
    DirectorySink, ExportError, ExportJob, ExportUpdate, TableData, TableDocument, spawn_export,
};
use tabex_model::{ColumnDescriptor, ExportFormat, ExportOptions, Record};

use crate::cli::ExportArgs;
use crate::summary::apply_table_style;
use crate::types::ExportSummary;

/// Run the `formats` command: list supported formats.
pub fn run_formats() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Format", "Extension", "MIME type"]);
    apply_table_style(&mut table);
    for format in ExportFormat::ALL {
        table.add_row(vec![
            format.to_string(),
            format.extension().to_string(),
            format.mime().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Run the `export` command.
pub fn run_export(args: &ExportArgs) -> Result<ExportSummary> {
    let format: ExportFormat = args.format.into();
    let span = info_span!("export", input = %args.input.display(), %format);
    let _guard = span.enter();

    let options = build_options(args);
    let (records, columns) = load_input(&args.input, format)?;
    debug!(rows = records.len(), columns = columns.len(), "input loaded");

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("export"));
    let sink = DirectorySink::new(&output_dir)?;

    let rows = records.len();
    let job = ExportJob {
        records,
        columns,
        format,
        options,
    };

    let (sender, receiver) = unbounded();
    spawn_export(job, sink, sender);

    let progress = ProgressBar::new(3);
    progress.set_style(ProgressStyle::with_template(
        "{msg:20} [{bar:20}] {pos}/{len}",
    )?);

    let mut summary = None;
    for update in receiver.iter() {
        match update {
            ExportUpdate::Progress { step } => {
                progress.set_message(step.label());
                progress.inc(1);
            }
            ExportUpdate::FileWritten { filename } => {
                debug!(%filename, "file written");
            }
            ExportUpdate::Complete { result } => {
                progress.finish_and_clear();
                summary = Some(ExportSummary {
                    filename: result.filename,
                    output_dir: output_dir.clone(),
                    rows,
                    bytes_written: result.bytes_written,
                    elapsed_ms: result.elapsed_ms,
                });
            }
            ExportUpdate::Error { error } => {
                progress.finish_and_clear();
                return Err(error).context("export failed");
            }
            ExportUpdate::Cancelled => {
                progress.finish_and_clear();
                bail!("export cancelled");
            }
        }
    }

    summary.context("export thread ended without a result")
}

/// Resolve export options from CLI flags.
fn build_options(args: &ExportArgs) -> ExportOptions {
    let mut options = ExportOptions::new()
        .with_orientation(args.orientation.into())
        .with_page_format(args.page_format.into());
    if let Some(filename) = &args.filename {
        options = options.with_filename(filename.clone());
    }
    if let Some(title) = &args.title {
        options = options.with_title(title.clone());
    }
    options
}

/// Load exporter inputs from a JSON record array or a CSV table.
fn load_input(input: &Path, format: ExportFormat) -> Result<(Vec<Record>, Vec<ColumnDescriptor>)> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => load_json_records(input),
        "csv" => load_csv_table(input, format),
        other => bail!("unsupported input type '{other}': expected .json or .csv"),
    }
}

/// Parse a JSON array of records; columns are derived from the first
/// record's keys with the key as label.
fn load_json_records(input: &Path) -> Result<(Vec<Record>, Vec<ColumnDescriptor>)> {
    let file =
        File::open(input).with_context(|| format!("cannot open input {}", input.display()))?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("input {} is not a JSON record array", input.display()))?;

    let columns: Vec<ColumnDescriptor> = records
        .first()
        .map(|record| {
            record
                .keys()
                .map(|key| ColumnDescriptor::new(key.clone(), key.clone()))
                .collect()
        })
        .unwrap_or_default();

    Ok((records, columns))
}

/// Read a CSV table through the table adapter: positional column keys, the
/// file stem as table id, and no JSON export (positional records carry no
/// meaningful keys).
fn load_csv_table(input: &Path, format: ExportFormat) -> Result<(Vec<Record>, Vec<ColumnDescriptor>)> {
    if format == ExportFormat::Json {
        return Err(ExportError::unsupported_format(format))
            .context("CSV table input cannot be exported as JSON");
    }

    let file =
        File::open(input).with_context(|| format!("cannot open input {}", input.display()))?;
    let table = TableData::from_csv_reader(BufReader::new(file))
        .with_context(|| format!("cannot read CSV table {}", input.display()))?;

    let id = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table")
        .to_string();
    let mut document = TableDocument::new();
    document.insert(id.clone(), table);

    let table = document
        .get(&id)
        .ok_or_else(|| ExportError::table_not_found(&id))?;
    Ok(table.to_export_inputs())
}
