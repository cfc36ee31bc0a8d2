use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Answer `GET /image/:id` misses with 200 instead of 400, as older clients expect.
    pub legacy_image_status: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the redb database file
    pub data_dir: String,
    /// Directory uploaded image bytes are written to
    pub image_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            image_dir: "./static/images".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let image_dir =
            std::env::var("IMAGE_DIR").unwrap_or_else(|_| "./static/images".to_string());

        let legacy_image_status = std::env::var("LEGACY_IMAGE_STATUS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let config = Config {
            server: ServerConfig { bind_address },
            storage: StorageConfig {
                data_dir,
                image_dir,
            },
            legacy_image_status,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "DATA_DIR cannot be empty".to_string(),
            ));
        }

        if self.storage.image_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "IMAGE_DIR cannot be empty".to_string(),
            ));
        }

        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError(format!(
                "BIND_ADDRESS '{}' is not a valid socket address",
                self.server.bind_address
            )));
        }

        if self.legacy_image_status {
            tracing::warn!(
                "LEGACY_IMAGE_STATUS is enabled. Missing images will be reported with HTTP 200."
            );
        }

        Ok(())
    }
}
