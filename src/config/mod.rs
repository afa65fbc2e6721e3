use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Size ceiling for non-file form fields such as `folderName`.
pub const DEFAULT_MAX_FIELD_SIZE: usize = 1024 * 1024;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub cors: CorsConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3400,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    /// Explicit upload root. When unset the root is `<documents>/<folder>`.
    pub root: Option<String>,
    /// Folder appended to the documents directory.
    pub folder: String,
    /// Where multipart file parts are streamed before being moved into place.
    /// Defaults to the OS temp directory.
    pub staging_dir: Option<String>,
    /// Per-file ceiling in bytes; unlimited when unset.
    pub max_file_size: Option<u64>,
    pub max_field_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: None,
            folder: "uploads".to_string(),
            staging_dir: None,
            max_file_size: None,
            max_field_size: DEFAULT_MAX_FIELD_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["OPTIONS", "POST", "GET", "DELETE"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_headers: ["content-type", "authorization"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Front-end assets served for any route the API does not claim.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub dir: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(File::with_name("config/local").required(false))
            // e.g. `APP_SERVER__PORT=8080 ./target/doc-uploader`
            .add_source(Environment::with_prefix("app").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_desktop_layout() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr(), "127.0.0.1:3400");
        assert_eq!(settings.upload.folder, "uploads");
        assert_eq!(settings.upload.max_field_size, 1024 * 1024);
        assert!(settings.upload.max_file_size.is_none());
        assert_eq!(settings.cors.allowed_origins, vec!["*"]);
        assert!(settings.static_files.dir.is_none());
    }

    #[test]
    fn test_partial_sources_keep_section_defaults() {
        let settings: Settings = Config::builder()
            .set_override("server.port", 8080)
            .unwrap()
            .set_override("upload.max_file_size", 4096)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.upload.max_file_size, Some(4096));
        assert_eq!(settings.upload.folder, "uploads");
    }
}
