use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::{ApiError, AppJson, AppPath, SuccessMessage};
use crate::storage::models::{LinkRecord, NewLink};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub link: LinkRecord,
}

#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkRecord>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn create_link(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<NewLink>,
) -> Result<Json<SuccessMessage>, ApiError> {
    let link = state.db.insert_link(&req).map_err(|e| {
        tracing::warn!(error = %e, "Rejected link");
        ApiError::from(e)
    })?;

    tracing::debug!(link_id = link.id, "Created link");
    Ok(SuccessMessage::json("link created successfully"))
}

pub async fn list_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LinkListResponse>, ApiError> {
    let links = state.db.list_links()?;
    Ok(Json(LinkListResponse { links }))
}

pub async fn get_link(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<LinkResponse>, ApiError> {
    let link = state
        .db
        .get_link(id)?
        .ok_or_else(|| ApiError::not_found("Link item does not exist"))?;

    Ok(Json(LinkResponse { link }))
}

/// Deleting an id that does not exist still reports success.
pub async fn delete_link(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<SuccessMessage>, ApiError> {
    let deleted = state.db.delete_link(id)?;

    tracing::debug!(link_id = id, deleted, "Deleted link");
    Ok(SuccessMessage::json("link deleted successfully"))
}
