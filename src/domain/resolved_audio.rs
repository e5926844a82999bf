use std::path::{Path, PathBuf};

/// An audio file materialized inside a request workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAudio {
    local_path: PathBuf,
    extension: String,
    byte_size: u64,
}

impl ResolvedAudio {
    /// Returns `None` for a zero-byte file.
    pub fn new(local_path: PathBuf, extension: impl Into<String>, byte_size: u64) -> Option<Self> {
        if byte_size == 0 {
            return None;
        }

        Some(Self {
            local_path,
            extension: extension.into(),
            byte_size,
        })
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Extension including the leading dot, e.g. `.wav`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }
}
