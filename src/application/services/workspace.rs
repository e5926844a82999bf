use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const WORKSPACE_PREFIX: &str = "callsight-";

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("creating workspace under {root}: {source}")]
    CreateFailed { root: PathBuf, source: io::Error },
    #[error("writing {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },
}

/// Creates one [`ScopedWorkspace`] per request under a common root.
#[derive(Debug, Clone)]
pub struct WorkspaceFactory {
    root: PathBuf,
}

impl WorkspaceFactory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn acquire(&self) -> Result<ScopedWorkspace, WorkspaceError> {
        ScopedWorkspace::acquire_in(&self.root)
    }
}

impl Default for WorkspaceFactory {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

/// A uniquely named temporary directory owned by a single request.
///
/// The directory is removed by [`ScopedWorkspace::release`], or on drop if the
/// request future is abandoned before reaching it. Removal errors are logged
/// and never returned.
#[derive(Debug)]
pub struct ScopedWorkspace {
    dir: TempDir,
}

impl ScopedWorkspace {
    pub fn acquire_in(root: &Path) -> Result<Self, WorkspaceError> {
        let create_failed = |source| WorkspaceError::CreateFailed {
            root: root.to_path_buf(),
            source,
        };

        std::fs::create_dir_all(root).map_err(create_failed)?;
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(root)
            .map_err(create_failed)?;

        tracing::debug!(path = %dir.path().display(), "Workspace acquired");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for `file_name` directly inside the workspace.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    pub async fn write_file(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, WorkspaceError> {
        let path = self.file_path(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| WorkspaceError::WriteFailed {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    pub fn release(self) {
        let path = self.dir.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => tracing::debug!(path = %path.display(), "Workspace released"),
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to remove workspace, leaving it behind"
            ),
        }
    }
}
