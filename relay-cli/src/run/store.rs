//! Artifact map persistence
//!
//! The map is rewritten wholesale after every job so that progress made
//! before a fatal error can still be inspected.

use relay_core::domain::artifact::ArtifactMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{Result, RunError};

/// Writes the cumulative artifact map to a single JSON file
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file's contents with `artifacts`
    ///
    /// Written to a sibling temp file first and renamed into place, so
    /// readers never observe a half-written map.
    pub async fn save(&self, artifacts: &ArtifactMap) -> Result<()> {
        self.write(artifacts).await.map_err(|source| RunError::Persist {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} artifact(s) to {}",
            artifacts.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn write(&self, artifacts: &ArtifactMap) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(artifacts)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await
    }
}
