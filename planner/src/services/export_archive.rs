//! Export archive implementations
//!
//! Keeps a server-side copy of every downloaded export.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::traits::ExportArchive;

/// Writes exports into a directory, creating it on first use
#[derive(Debug, Clone)]
pub struct RealExportArchive {
    base_dir: PathBuf,
}

impl RealExportArchive {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn archive_error(path: &PathBuf, source: std::io::Error) -> PlannerError {
        PlannerError::ArchiveError {
            path: path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl ExportArchive for RealExportArchive {
    async fn archive(&self, filename: &str, content: &[u8]) -> PlannerResult<Option<PathBuf>> {
        // never let a filename escape the archive directory
        let name = std::path::Path::new(filename)
            .file_name()
            .ok_or_else(|| {
                Self::archive_error(
                    &self.base_dir.join(filename),
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file name"),
                )
            })?;

        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| Self::archive_error(&self.base_dir, e))?;

        let path = self.base_dir.join(name);
        fs::write(&path, content)
            .await
            .map_err(|e| Self::archive_error(&path, e))?;

        info!(path = %path.display(), bytes = content.len(), "💾 Archived export");
        Ok(Some(path))
    }
}

/// Archive that keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledExportArchive;

#[async_trait]
impl ExportArchive for DisabledExportArchive {
    async fn archive(&self, _filename: &str, _content: &[u8]) -> PlannerResult<Option<PathBuf>> {
        Ok(None)
    }
}
