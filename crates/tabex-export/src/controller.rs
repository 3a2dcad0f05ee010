//! Busy-state export controller.
//!
//! Wraps an [`Exporter`] with the Idle/Exporting state UI callers observe.
//! The controller closes over the data and columns it was constructed with;
//! each entry point only takes per-call options.
//!
//! A second call while one is in flight is rejected with
//! [`ExportError::Busy`] instead of letting both calls flip a shared flag
//! and leave it inconsistent. The flag resets on every exit path, panics
//! included, via a drop guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ExportError, Result};
use crate::exporter::Exporter;
use crate::sink::FileSink;
use tabex_model::{ColumnDescriptor, ExportFormat, ExportOptions, Record};

/// Stateful wrapper exposing busy-state around exporter calls.
pub struct ExportController<S: FileSink> {
    records: Vec<Record>,
    columns: Vec<ColumnDescriptor>,
    exporter: Exporter<S>,
    exporting: AtomicBool,
}

impl<S: FileSink> ExportController<S> {
    /// Create a controller over fixed data, columns, and sink.
    pub fn new(records: Vec<Record>, columns: Vec<ColumnDescriptor>, sink: S) -> Self {
        Self {
            records,
            columns,
            exporter: Exporter::new(sink),
            exporting: AtomicBool::new(false),
        }
    }

    /// True while an export is in flight.
    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::SeqCst)
    }

    /// Run one export in the given format.
    pub fn export(&self, format: ExportFormat, options: &ExportOptions) -> Result<()> {
        let _guard = self.begin()?;
        self.exporter
            .export(format, &self.records, &self.columns, options)
    }

    /// Export the controller's data as CSV.
    pub fn export_to_csv(&self, options: &ExportOptions) -> Result<()> {
        self.export(ExportFormat::Csv, options)
    }

    /// Export the controller's data as Excel-flavoured CSV.
    pub fn export_to_excel(&self, options: &ExportOptions) -> Result<()> {
        self.export(ExportFormat::Excel, options)
    }

    /// Export the controller's data as JSON.
    pub fn export_to_json(&self, options: &ExportOptions) -> Result<()> {
        self.export(ExportFormat::Json, options)
    }

    /// Export the controller's data as a PDF table.
    pub fn export_to_pdf(&self, options: &ExportOptions) -> Result<()> {
        self.export(ExportFormat::Pdf, options)
    }

    /// Claim the busy flag, rejecting overlap.
    fn begin(&self) -> Result<BusyGuard<'_>> {
        self.exporting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ExportError::Busy)?;
        Ok(BusyGuard {
            flag: &self.exporting,
        })
    }
}

/// Resets the busy flag when the export call leaves scope, whatever the
/// outcome.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use serde_json::json;

    fn sample() -> (Vec<Record>, Vec<ColumnDescriptor>) {
        let mut rec = Record::new();
        rec.insert("name".to_string(), json!("Ada"));
        rec.insert("score".to_string(), json!(92));
        (
            vec![rec],
            vec![
                ColumnDescriptor::new("name", "Name"),
                ColumnDescriptor::new("score", "Score"),
            ],
        )
    }

    #[test]
    fn test_idle_after_success() {
        let (records, columns) = sample();
        let sink = MemorySink::new();
        let controller = ExportController::new(records, columns, sink.clone());

        assert!(!controller.is_exporting());
        controller.export_to_csv(&ExportOptions::new()).unwrap();
        assert!(!controller.is_exporting());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_idle_after_failure() {
        let mut rec = Record::new();
        rec.insert("bad".to_string(), json!([1, 2]));
        let columns = vec![ColumnDescriptor::new("bad", "Bad")];
        let controller = ExportController::new(vec![rec], columns, MemorySink::new());

        assert!(controller.export_to_csv(&ExportOptions::new()).is_err());
        assert!(!controller.is_exporting());
        // The controller stays usable after an error.
        assert!(controller.export_to_json(&ExportOptions::new()).is_ok());
    }

    #[test]
    fn test_overlapping_call_is_rejected() {
        // Claim the flag as a first export would, then observe the second
        // call being rejected.
        let (records, columns) = sample();
        let controller = ExportController::new(records, columns, MemorySink::new());
        let guard = controller.begin().unwrap();
        assert!(controller.is_exporting());
        assert!(matches!(
            controller.export_to_csv(&ExportOptions::new()),
            Err(ExportError::Busy)
        ));
        drop(guard);
        assert!(controller.export_to_csv(&ExportOptions::new()).is_ok());
    }

    #[test]
    fn test_all_entry_points_share_one_flag() {
        let (records, columns) = sample();
        let controller = ExportController::new(records, columns, MemorySink::new());
        let guard = controller.begin().unwrap();
        for format in ExportFormat::ALL {
            assert!(matches!(
                controller.export(format, &ExportOptions::new()),
                Err(ExportError::Busy)
            ));
        }
        drop(guard);
    }
}
