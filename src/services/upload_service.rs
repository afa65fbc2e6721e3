use crate::error::UploadError;
use crate::models::UploadRequest;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

const PLACING_PREFIX: &str = ".placing-";

/// Places staged uploads under a fixed upload root.
pub struct UploadService {
    root: PathBuf,
}

impl UploadService {
    /// The root is created (recursively) here, once, before any request is
    /// served.
    pub async fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        tracing::info!(root = %root.display(), "upload root ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the folder a file should land in. Nested relative folders are
    /// allowed; anything that could leave the root is not.
    pub fn destination_folder(&self, folder_name: Option<&str>) -> Result<PathBuf, UploadError> {
        let Some(name) = folder_name.filter(|n| !n.is_empty()) else {
            return Ok(self.root.clone());
        };

        let mut folder = self.root.clone();
        for component in Path::new(name).components() {
            match component {
                Component::Normal(part) => folder.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(UploadError::InvalidFolderName(name.to_string()));
                }
            }
        }
        Ok(folder)
    }

    /// Move a staged upload to `<root>[/<folder>]/<original name>`, replacing
    /// any file already there. Returns the final path.
    pub async fn place(&self, request: UploadRequest) -> Result<PathBuf, UploadError> {
        let UploadRequest { file, folder_name } = request;

        validate_file_name(&file.original_name)?;
        let folder = self.destination_folder(folder_name.as_deref())?;

        if !fs::try_exists(&folder).await.unwrap_or(false) {
            fs::create_dir_all(&folder)
                .await
                .map_err(|source| UploadError::DirectoryCreation {
                    path: folder.clone(),
                    source,
                })?;
            tracing::debug!(folder = %folder.display(), "created upload folder");
        }

        let destination = folder.join(&file.original_name);
        move_file(file.path(), &destination)
            .await
            .map_err(|source| UploadError::Move {
                path: destination.clone(),
                source,
            })?;

        tracing::info!(
            file = %file.original_name,
            size = file.size,
            destination = %destination.display(),
            "upload placed"
        );
        Ok(destination)
    }
}

/// An uploaded file name must be one plain path component, kept verbatim.
pub fn validate_file_name(name: &str) -> Result<(), UploadError> {
    if name.is_empty() {
        return Err(UploadError::MissingFile);
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(UploadError::InvalidFileName(name.to_string())),
    }
}

/// Rename into place. When source and destination sit on different
/// filesystems the content is copied next to the destination first and then
/// renamed over it, so readers never observe a partially written file.
async fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(from = %from.display(), to = %to.display(), "rename crosses devices, copying");
            let (from, to) = (from.to_path_buf(), to.to_path_buf());
            tokio::task::spawn_blocking(move || copy_then_persist(&from, &to))
                .await
                .map_err(io::Error::other)?
        }
        Err(e) => Err(e),
    }
}

fn copy_then_persist(from: &Path, to: &Path) -> io::Result<()> {
    let dir = to.parent().unwrap_or_else(|| Path::new("."));
    let mut placing = tempfile::Builder::new()
        .prefix(PLACING_PREFIX)
        .tempfile_in(dir)?;
    let mut source = std::fs::File::open(from)?;
    std::io::copy(&mut source, placing.as_file_mut())?;
    placing.as_file().sync_all()?;
    placing.persist(to).map_err(|e| e.error)?;
    std::fs::remove_file(from)
}
