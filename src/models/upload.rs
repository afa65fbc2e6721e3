use std::path::Path;
use tempfile::TempPath;

pub const FILE_FIELD: &str = "file";
pub const FOLDER_FIELD: &str = "folderName";

pub const UPLOAD_ACK: &str = "File uploaded successfully";

/// A file part that has been streamed to disk but not yet placed.
///
/// The temporary file is deleted when this value is dropped, so a staged
/// file never outlives the request that produced it.
#[derive(Debug)]
pub struct StagedFile {
    pub original_name: String,
    pub size: u64,
    path: TempPath,
}

impl StagedFile {
    pub fn new(original_name: String, size: u64, path: TempPath) -> Self {
        Self {
            original_name,
            size,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug)]
pub struct UploadRequest {
    pub file: StagedFile,
    pub folder_name: Option<String>,
}
