
#[cfg(test)]
pub(crate) mod support {
    use crate::config::Settings;
    use crate::routes::create_router;
    use crate::services::{StagingService, UploadService};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::Router;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tempfile::TempDir;

    pub const BOUNDARY: &str = "----upload-test-boundary";

    pub struct TestApp {
        pub tmp: TempDir,
        pub root: PathBuf,
        pub staging: PathBuf,
        pub router: Router,
    }

    impl TestApp {
        pub async fn new() -> Self {
            Self::with_settings(Settings::default()).await
        }

        pub async fn with_settings(mut settings: Settings) -> Self {
            let tmp = tempfile::tempdir().unwrap();
            let root = tmp.path().join("uploads");
            let staging = tmp.path().join("staging");
            settings.upload.root = Some(root.display().to_string());
            settings.upload.staging_dir = Some(staging.display().to_string());

            let upload_service = Arc::new(UploadService::new(&root).await.unwrap());
            let staging_service = Arc::new(
                StagingService::new(&staging, settings.upload.max_file_size)
                    .await
                    .unwrap(),
            );
            let state = AppState::new(
                upload_service,
                staging_service,
                settings.upload.max_field_size,
            );

            Self {
                router: create_router(state, &settings),
                tmp,
                root,
                staging,
            }
        }
    }

    pub enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
        let mut body: Vec<u8> = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File(name, filename, content) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(content);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    pub fn count_entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }
}
