//! CLI argument definitions for the tabular exporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabex_model::{ExportFormat, Orientation, PageFormat};

#[derive(Parser)]
#[command(
    name = "tabex",
    version,
    about = "Tabular data exporter - CSV, Excel CSV, JSON, and PDF",
    long_about = "Export tabular data to downloadable artifacts.\n\n\
                  Accepts a JSON record array or a CSV table as input and\n\
                  produces CSV, Excel-flavoured CSV (UTF-8 BOM), pretty JSON,\n\
                  or a paginated PDF table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export an input file to the chosen format.
    Export(ExportArgs),

    /// List supported export formats.
    Formats,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Input file: a JSON array of records (.json) or a CSV table (.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Target export format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Output directory for the artifact (default: ./export).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Artifact filename (default: export.<ext> for the format).
    #[arg(long = "filename", value_name = "NAME")]
    pub filename: Option<String>,

    /// Document heading. PDF output only (default: "Data Export").
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Page orientation. PDF output only.
    #[arg(long = "orientation", value_enum, default_value = "portrait")]
    pub orientation: OrientationArg,

    /// Page size. PDF output only.
    #[arg(long = "page-format", value_enum, default_value = "a4")]
    pub page_format: PageFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Excel,
    Json,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Excel => ExportFormat::Excel,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PageFormatArg {
    A4,
    Letter,
}

impl From<PageFormatArg> for PageFormat {
    fn from(arg: PageFormatArg) -> Self {
        match arg {
            PageFormatArg::A4 => PageFormat::A4,
            PageFormatArg::Letter => PageFormat::Letter,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
