//! portfolio-backend - storage API for a portfolio website
//!
//! This crate stores uploaded images, project links and descriptions:
//! - redb embedded database for records (ACID, crash-safe)
//! - Local filesystem object store for image bytes
//! - JSON REST API with multipart image upload

pub mod api;
pub mod config;
pub mod object_store;
pub mod storage;
#[cfg(test)]
pub mod testutil;

use std::sync::Arc;

use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub object_store: Arc<dyn object_store::ObjectStore>,
}
