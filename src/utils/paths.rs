use crate::config::UploadConfig;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Resolve the upload root: the configured root if set, otherwise the
/// folder under the user's documents directory (home directory on
/// platforms without one).
pub fn resolve_upload_root(config: &UploadConfig) -> Result<PathBuf> {
    if let Some(root) = &config.root {
        return Ok(PathBuf::from(root));
    }
    let base = dirs::document_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow!("could not determine a documents or home directory"))?;
    Ok(base.join(&config.folder))
}

pub fn resolve_staging_dir(config: &UploadConfig) -> PathBuf {
    config
        .staging_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
}
