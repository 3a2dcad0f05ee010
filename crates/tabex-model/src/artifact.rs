//! The export product handed to a file sink.

use crate::format::ExportFormat;

/// An ephemeral export artifact: serialized bytes plus delivery metadata.
///
/// Artifacts are constructed, handed to a sink, and discarded; nothing is
/// cached between export calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Target filename, already resolved against the format default.
    pub filename: String,
    /// MIME type of the payload.
    pub mime: &'static str,
    /// Serialized payload.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Build an artifact for the given format, resolving filename and MIME.
    pub fn new(format: ExportFormat, filename: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            mime: format.mime(),
            bytes,
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
