//! Background export thread.
//!
//! Runs the serialize-then-deliver sequence off the caller's thread,
//! streaming progress updates over a channel, with cooperative
//! cancellation between steps.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crossbeam_channel::Sender;
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::exporter::build_artifact;
use crate::sink::FileSink;
use tabex_model::{ColumnDescriptor, ExportFormat, ExportOptions, Record};

/// A complete export request: data, columns, target format, options.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub records: Vec<Record>,
    pub columns: Vec<ColumnDescriptor>,
    pub format: ExportFormat,
    pub options: ExportOptions,
}

/// Steps within the export process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStep {
    #[default]
    Preparing,
    Serializing,
    WritingFile,
}

impl ExportStep {
    /// Human-readable label for progress display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Preparing => "Preparing...",
            Self::Serializing => "Serializing...",
            Self::WritingFile => "Writing file...",
        }
    }
}

/// Messages sent from the background export thread to the caller.
#[derive(Debug)]
pub enum ExportUpdate {
    /// Progress update.
    Progress { step: ExportStep },
    /// Artifact successfully delivered.
    FileWritten { filename: String },
    /// Export completed successfully.
    Complete { result: ExportResult },
    /// Export failed.
    Error { error: ExportError },
    /// Export was cancelled by the caller.
    Cancelled,
}

/// Successful export result.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Filename the artifact was delivered under.
    pub filename: String,
    /// Artifact payload size.
    pub bytes_written: usize,
    /// Total elapsed time in milliseconds.
    pub elapsed_ms: u64,
}

/// Handle to cancel an in-progress export.
#[derive(Debug, Clone, Default)]
pub struct ExportHandle {
    cancel_flag: Arc<AtomicBool>,
}

impl ExportHandle {
    /// Create a new handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next step boundary.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_flag)
    }
}

/// Spawn a background export thread.
///
/// Returns a handle that can be used to cancel the export. The final
/// channel message is always one of `Complete`, `Error`, or `Cancelled`.
pub fn spawn_export<S>(job: ExportJob, sink: S, sender: Sender<ExportUpdate>) -> ExportHandle
where
    S: FileSink + Send + 'static,
{
    let handle = ExportHandle::new();
    let cancel_flag = handle.cancel_flag();

    std::thread::spawn(move || {
        let result = execute_export(&job, &sink, &sender, &cancel_flag);

        match result {
            Ok(result) => {
                let _ = sender.send(ExportUpdate::Complete { result });
            }
            Err(ExportError::Cancelled) => {
                let _ = sender.send(ExportUpdate::Cancelled);
            }
            Err(error) => {
                let _ = sender.send(ExportUpdate::Error { error });
            }
        }
    });

    handle
}

/// Execute the export steps, checking the cancel flag between each.
fn execute_export<S: FileSink>(
    job: &ExportJob,
    sink: &S,
    sender: &Sender<ExportUpdate>,
    cancel_flag: &Arc<AtomicBool>,
) -> Result<ExportResult> {
    let start = Instant::now();

    sender
        .send(ExportUpdate::Progress {
            step: ExportStep::Preparing,
        })
        .ok();
    check_cancel(cancel_flag)?;

    sender
        .send(ExportUpdate::Progress {
            step: ExportStep::Serializing,
        })
        .ok();
    let artifact = build_artifact(job.format, &job.records, &job.columns, &job.options)?;
    debug!(
        format = %job.format,
        bytes = artifact.len(),
        "artifact serialized"
    );
    check_cancel(cancel_flag)?;

    sender
        .send(ExportUpdate::Progress {
            step: ExportStep::WritingFile,
        })
        .ok();
    sink.write(&artifact)?;
    sender
        .send(ExportUpdate::FileWritten {
            filename: artifact.filename.clone(),
        })
        .ok();

    Ok(ExportResult {
        filename: artifact.filename,
        bytes_written: artifact.bytes.len(),
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}

fn check_cancel(cancel_flag: &Arc<AtomicBool>) -> Result<()> {
    if cancel_flag.load(Ordering::SeqCst) {
        Err(ExportError::Cancelled)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crossbeam_channel::unbounded;
    use serde_json::json;

    fn job(format: ExportFormat) -> ExportJob {
        let mut rec = Record::new();
        rec.insert("name".to_string(), json!("Ada"));
        ExportJob {
            records: vec![rec],
            columns: vec![ColumnDescriptor::new("name", "Name")],
            format,
            options: ExportOptions::new(),
        }
    }

    #[test]
    fn test_background_export_completes() {
        let sink = MemorySink::new();
        let (sender, receiver) = unbounded();
        spawn_export(job(ExportFormat::Csv), sink.clone(), sender);

        let mut completed = None;
        for update in receiver.iter() {
            match update {
                ExportUpdate::Complete { result } => {
                    completed = Some(result);
                    break;
                }
                ExportUpdate::Error { error } => panic!("unexpected error: {error}"),
                ExportUpdate::Cancelled => panic!("unexpected cancellation"),
                _ => {}
            }
        }

        let result = completed.expect("export should complete");
        assert_eq!(result.filename, "export.csv");
        assert!(result.bytes_written > 0);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_pre_cancelled_export_writes_nothing() {
        let sink = MemorySink::new();
        let (sender, receiver) = unbounded();

        // Cancel before the thread reaches its first checkpoint; the flag
        // is pre-set through a cloned handle.
        let handle = ExportHandle::new();
        handle.cancel();
        let cancel_flag = handle.cancel_flag();
        let job = job(ExportFormat::Pdf);
        let sink_clone = sink.clone();
        std::thread::spawn(move || {
            let result = execute_export(&job, &sink_clone, &sender, &cancel_flag);
            assert!(matches!(result, Err(ExportError::Cancelled)));
        })
        .join()
        .unwrap();

        // Only the Preparing progress message got out.
        let updates: Vec<ExportUpdate> = receiver.iter().collect();
        assert!(
            updates
                .iter()
                .all(|u| matches!(u, ExportUpdate::Progress { .. }))
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_error_is_reported_over_channel() {
        let mut rec = Record::new();
        rec.insert("bad".to_string(), json!({"nested": true}));
        let job = ExportJob {
            records: vec![rec],
            columns: vec![ColumnDescriptor::new("bad", "Bad")],
            format: ExportFormat::Csv,
            options: ExportOptions::new(),
        };

        let (sender, receiver) = unbounded();
        spawn_export(job, MemorySink::new(), sender);

        let saw_error = receiver
            .iter()
            .any(|u| matches!(u, ExportUpdate::Error { .. }));
        assert!(saw_error);
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(ExportStep::Preparing.label(), "Preparing...");
        assert_eq!(ExportStep::WritingFile.label(), "Writing file...");
    }
}
