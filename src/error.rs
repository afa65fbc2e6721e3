use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single `/upload` request. Every variant is terminal for the
/// request; nothing is retried.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("no file was provided in the `file` field")]
    MissingFile,

    #[error("only one file may be uploaded per request")]
    UnexpectedFile,

    #[error("invalid folder name: {0}")]
    InvalidFolderName(String),

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("field `{0}` is not valid UTF-8")]
    InvalidField(String),

    #[error("field `{field}` exceeds the {limit} byte limit")]
    FieldTooLarge { field: String, limit: usize },

    #[error("file exceeds the {limit} byte limit")]
    FileTooLarge { limit: u64 },

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("failed to stage upload: {0}")]
    Staging(#[source] std::io::Error),

    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move file to {}: {source}", .path.display())]
    Move {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingFile
            | UploadError::UnexpectedFile
            | UploadError::InvalidFolderName(_)
            | UploadError::InvalidFileName(_)
            | UploadError::InvalidField(_) => StatusCode::BAD_REQUEST,
            UploadError::FieldTooLarge { .. } | UploadError::FileTooLarge { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            UploadError::Multipart(e) => e.status(),
            UploadError::Staging(_)
            | UploadError::DirectoryCreation { .. }
            | UploadError::Move { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "upload failed");
        } else {
            tracing::warn!(error = %self, "upload rejected");
        }
        (status, Json(self.to_string())).into_response()
    }
}
