use crate::error::UploadError;
use crate::models::StagedFile;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

const STAGED_PREFIX: &str = ".staged-";

/// Temporary landing area for uploaded file parts.
pub struct StagingService {
    dir: PathBuf,
    max_file_size: Option<u64>,
}

impl StagingService {
    pub async fn new(dir: impl Into<PathBuf>, max_file_size: Option<u64>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir, max_file_size })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stream `chunks` into a fresh temporary file.
    ///
    /// On any error, including the size ceiling being hit, the partial file
    /// is removed before returning.
    pub async fn stage<S, E>(&self, original_name: String, chunks: S) -> Result<StagedFile, UploadError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        UploadError: From<E>,
    {
        let temp = tempfile::Builder::new()
            .prefix(STAGED_PREFIX)
            .tempfile_in(&self.dir)
            .map_err(UploadError::Staging)?;
        let (std_file, path) = temp.into_parts();
        let mut file = fs::File::from_std(std_file);

        let mut chunks = std::pin::pin!(chunks);
        let mut size: u64 = 0;
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            size += chunk.len() as u64;
            if let Some(limit) = self.max_file_size {
                if size > limit {
                    return Err(UploadError::FileTooLarge { limit });
                }
            }
            file.write_all(&chunk).await.map_err(UploadError::Staging)?;
        }
        file.flush().await.map_err(UploadError::Staging)?;
        drop(file);

        tracing::debug!(file = %original_name, size, staged = %path.display(), "staged upload");
        Ok(StagedFile::new(original_name, size, path))
    }
}
