pub mod health_handler;
pub mod upload_handler;

pub use health_handler::*;
pub use upload_handler::*;
