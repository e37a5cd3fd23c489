use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PackagingError, Result};

/// A freshly emptied output directory.
///
/// Created by [`OutputDir::reset`]. Unless [`OutputDir::commit`] is called the
/// directory and everything written into it is removed again on drop, so a
/// failed build never leaves half an output behind.
#[derive(Debug)]
pub struct OutputDir {
    path: PathBuf,
    committed: bool,
}

impl OutputDir {
    /// Remove `path` if it exists and create it again, empty
    pub fn reset<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            debug!("Removing previous output {:?}", path);
            fs::remove_dir_all(&path).map_err(|e| PackagingError::OutputDirFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        fs::create_dir_all(&path).map_err(|e| PackagingError::OutputDirFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            path,
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.path.join(name)
    }

    /// Keep the directory and its contents
    pub fn commit(mut self) -> PathBuf {
        self.committed = true;
        self.path.clone()
    }
}

impl Drop for OutputDir {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        warn!("Discarding incomplete output {:?}", self.path);
        if let Err(e) = fs::remove_dir_all(&self.path) {
            warn!("Failed to remove {:?}: {}", self.path, e);
        }
    }
}
