use crate::services::{StagingService, UploadService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub upload_service: Arc<UploadService>,
    pub staging: Arc<StagingService>,
    pub max_field_size: usize,
}

impl AppState {
    pub fn new(
        upload_service: Arc<UploadService>,
        staging: Arc<StagingService>,
        max_field_size: usize,
    ) -> Self {
        Self {
            upload_service,
            staging,
            max_field_size,
        }
    }
}
