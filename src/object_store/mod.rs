mod local;

pub use local::LocalStore;

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Object not found: {0}")]
    NotFound(String),
    #[error("Invalid object key: {0:?}")]
    InvalidKey(String),
}

/// Abstraction over image byte storage.
/// Keys are the sanitized upload filenames recorded in the image table.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), ObjectStoreError>;
    async fn get(&self, key: &str) -> Result<Bytes, ObjectStoreError>;
    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError>;
    async fn exists(&self, key: &str) -> Result<bool, ObjectStoreError>;
    /// Absolute location of the object, whether or not it exists yet.
    fn locate(&self, key: &str) -> Result<PathBuf, ObjectStoreError>;
}

/// Validate an uploaded filename for use as an object key.
///
/// Surrounding whitespace is trimmed. Names that could escape the store
/// directory or address a hidden file are rejected outright.
pub fn sanitize_filename(raw: &str) -> Result<String, ObjectStoreError> {
    let name = raw.trim();

    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(&['/', '\\'][..])
        || name.chars().any(char::is_control);

    if invalid {
        return Err(ObjectStoreError::InvalidKey(raw.to_string()));
    }

    Ok(name.to_string())
}
