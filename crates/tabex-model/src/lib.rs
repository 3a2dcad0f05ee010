//! Shared data model for the tabular export toolkit.
//!
//! The model is deliberately schema-free: a [`Record`] is an opaque
//! string-keyed mapping, and the [`ColumnDescriptor`] list supplied to an
//! export is the sole source of column selection and ordering.

pub mod artifact;
pub mod format;
pub mod options;
pub mod record;

pub use artifact::Artifact;
pub use format::ExportFormat;
pub use options::{ExportOptions, Orientation, PageFormat};
pub use record::{ColumnDescriptor, Record};
