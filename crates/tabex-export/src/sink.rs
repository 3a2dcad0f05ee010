//! Artifact delivery.
//!
//! Serialization is pure; everything environment-specific sits behind the
//! [`FileSink`] capability. The filesystem sink is the production target;
//! the memory sink backs tests and in-process consumers.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{ExportError, Result};
use tabex_model::Artifact;

/// Capability to deliver a finished artifact.
pub trait FileSink {
    /// Deliver the artifact. Either the whole payload is delivered or the
    /// call fails; sinks never expose partial artifacts.
    fn write(&self, artifact: &Artifact) -> Result<()>;
}

/// Sink writing artifacts into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink rooted at `dir`, creating the directory if needed.
    ///
    /// An uncreatable target is an environment failure: the export layer
    /// has nowhere to deliver to.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            ExportError::environment(format!(
                "cannot create output directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    /// Directory artifacts are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path an artifact will be written to.
    pub fn path_for(&self, artifact: &Artifact) -> PathBuf {
        self.dir.join(&artifact.filename)
    }
}

impl FileSink for DirectorySink {
    fn write(&self, artifact: &Artifact) -> Result<()> {
        let path = self.path_for(artifact);
        fs::write(&path, &artifact.bytes)?;
        debug!(
            path = %path.display(),
            bytes = artifact.len(),
            mime = artifact.mime,
            "artifact written"
        );
        Ok(())
    }
}

/// In-memory sink collecting artifacts for inspection.
///
/// Clones share the same buffer, so a copy handed to an exporter stays
/// observable from the test side.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: Arc<Mutex<Vec<Artifact>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn artifacts(&self) -> Vec<Artifact> {
        self.artifacts.lock().map(|a| a.clone()).unwrap_or_default()
    }

    /// Number of delivered artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.lock().map(|a| a.len()).unwrap_or(0)
    }

    /// True when nothing has been delivered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileSink for MemorySink {
    fn write(&self, artifact: &Artifact) -> Result<()> {
        let mut artifacts = self
            .artifacts
            .lock()
            .map_err(|_| ExportError::environment("memory sink lock poisoned"))?;
        artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabex_model::ExportFormat;

    fn artifact() -> Artifact {
        Artifact::new(
            ExportFormat::Csv,
            "export.csv".to_string(),
            b"Name\nAda".to_vec(),
        )
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("out")).unwrap();
        sink.write(&artifact()).unwrap();

        let written = fs::read(dir.path().join("out").join("export.csv")).unwrap();
        assert_eq!(written, b"Name\nAda");
    }

    #[test]
    fn test_memory_sink_shares_buffer_across_clones() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.write(&artifact()).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.artifacts()[0].filename, "export.csv");
    }

    #[test]
    fn test_memory_sink_starts_empty() {
        assert!(MemorySink::new().is_empty());
    }
}
