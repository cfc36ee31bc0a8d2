use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::{ApiError, AppJson, AppPath, SuccessMessage};
use crate::storage::models::{DescriptionRecord, NewDescription};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: DescriptionRecord,
}

pub async fn create_description(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<NewDescription>,
) -> Result<Json<SuccessMessage>, ApiError> {
    let description = state.db.insert_description(&req).map_err(|e| {
        tracing::warn!(error = %e, "Rejected description");
        ApiError::from(e)
    })?;

    tracing::debug!(description_id = description.id, "Created description");
    Ok(SuccessMessage::json("description created successfully"))
}

pub async fn get_description(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<DescriptionResponse>, ApiError> {
    let description = state
        .db
        .get_description(id)?
        .ok_or_else(|| ApiError::not_found("Description item does not exist"))?;

    Ok(Json(DescriptionResponse { description }))
}

pub async fn delete_description(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<SuccessMessage>, ApiError> {
    let deleted = state.db.delete_description(id)?;

    tracing::debug!(description_id = id, deleted, "Deleted description");
    Ok(SuccessMessage::json("description deleted successfully"))
}
