use crate::error::UploadError;
use crate::models::{StagedFile, UploadRequest, FILE_FIELD, FOLDER_FIELD, UPLOAD_ACK};
use crate::services::upload_service::validate_file_name;
use crate::state::AppState;
use axum::extract::{Multipart, State};
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};

/// `POST /upload`: one `file` part plus an optional `folderName` text field,
/// in any order.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, UploadError> {
    let mut file: Option<StagedFile> = None;
    let mut folder_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                // Browsers send an empty filename when no file was chosen.
                let Some(original_name) = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(str::to_owned)
                else {
                    continue;
                };
                if file.is_some() {
                    return Err(UploadError::UnexpectedFile);
                }
                validate_file_name(&original_name)?;
                file = Some(state.staging.stage(original_name, field).await?);
            }
            Some(FOLDER_FIELD) => {
                let text = read_text_field(FOLDER_FIELD, field, state.max_field_size).await?;
                folder_name = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or(UploadError::MissingFile)?;
    state
        .upload_service
        .place(UploadRequest { file, folder_name })
        .await?;

    Ok(UPLOAD_ACK)
}

async fn read_text_field<S, E>(field: &str, chunks: S, limit: usize) -> Result<String, UploadError>
where
    S: Stream<Item = Result<Bytes, E>>,
    UploadError: From<E>,
{
    let mut chunks = std::pin::pin!(chunks);
    let mut buf = BytesMut::new();
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > limit {
            return Err(UploadError::FieldTooLarge {
                field: field.to_string(),
                limit,
            });
        }
        buf.extend_from_slice(&chunk);
    }
    String::from_utf8(buf.to_vec()).map_err(|_| UploadError::InvalidField(field.to_string()))
}
