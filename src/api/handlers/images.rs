use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::{ApiError, AppPath, SuccessMessage};
use crate::object_store::sanitize_filename;
use crate::AppState;

const IMAGE_EXISTS: &str = "Image exist already";
const IMAGE_MISSING: &str = "Image does not exist";

/// Characters escaped when an image name becomes a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    /// Absolute filesystem path of the stored bytes
    pub image: String,
    /// Route serving the same bytes over HTTP
    pub url: String,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<SuccessMessage>, ApiError> {
    let mut upload: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read image: {e}")))?;
        upload = Some((file_name, data));
    }

    let (file_name, data) = upload.ok_or_else(|| ApiError::bad_request("image field is required"))?;
    let file_name =
        file_name.ok_or_else(|| ApiError::bad_request("image field must carry a filename"))?;

    let img_name = sanitize_filename(&file_name).map_err(|e| {
        tracing::warn!(file_name = %file_name, "Rejected image upload with unsafe filename");
        ApiError::from(e)
    })?;

    // Phase 1: claim the name in the database (uniqueness is enforced here)
    let image = state.db.insert_image(Some(&img_name)).map_err(|e| {
        if e.is_constraint() {
            tracing::debug!(img_name = %img_name, "Image name already taken");
            ApiError::from(e).with_message(IMAGE_EXISTS)
        } else {
            ApiError::from(e)
        }
    })?;

    // Phase 2: write the bytes, undoing the row if that fails
    if let Err(e) = state.object_store.put(&img_name, data).await {
        tracing::error!(img_name = %img_name, error = %e, "Failed to store image bytes");
        if let Err(e) = state.db.delete_image(image.id) {
            tracing::warn!(image_id = image.id, error = %e, "Failed to roll back image row");
        }
        // Best-effort cleanup of a partial write
        if let Err(e) = state.object_store.delete(&img_name).await {
            tracing::warn!(img_name = %img_name, error = %e, "Failed to remove partial image");
        }
        return Err(ApiError::from(e).with_message(IMAGE_EXISTS));
    }

    tracing::debug!(image_id = image.id, img_name = %img_name, "Saved image");
    Ok(SuccessMessage::json("image saved successfully"))
}

pub async fn get_image(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<ImageResponse>, ApiError> {
    let missing = || {
        let err = ApiError::not_found(IMAGE_MISSING);
        if state.config.legacy_image_status {
            err.with_status(StatusCode::OK)
        } else {
            err
        }
    };

    let img_name = state
        .db
        .get_image(id)?
        .and_then(|image| image.img_name)
        .ok_or_else(missing)?;

    let path = state.object_store.locate(&img_name).map_err(|e| {
        tracing::warn!(image_id = id, error = %e, "Stored image name is not addressable");
        missing()
    })?;

    Ok(Json(ImageResponse {
        image: path.to_string_lossy().to_string(),
        url: format!(
            "/static/images/{}",
            utf8_percent_encode(&img_name, PATH_SEGMENT)
        ),
    }))
}
