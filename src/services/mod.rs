pub mod staging_service;
pub mod upload_service;

pub use staging_service::StagingService;
pub use upload_service::UploadService;
