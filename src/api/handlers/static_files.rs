use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::response::{ApiError, AppPath};
use crate::object_store::ObjectStoreError;
use crate::AppState;

/// Serve image bytes by name.
/// Route: GET /static/images/:name
pub async fn serve_image(
    State(state): State<Arc<AppState>>,
    AppPath(name): AppPath<String>,
) -> Result<Response, ApiError> {
    let not_found = || ApiError::not_found("Image does not exist").with_status(StatusCode::NOT_FOUND);

    // Only serve names that were recorded by an upload
    state
        .db
        .get_image_by_name(&name)?
        .ok_or_else(not_found)?;

    let data = state.object_store.get(&name).await.map_err(|e| match e {
        ObjectStoreError::NotFound(_) => {
            tracing::warn!(img_name = %name, "Image row has no stored bytes");
            not_found()
        }
        _ => ApiError::from(e),
    })?;

    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    let mime = mime_guess::from_path(&name).first_or_octet_stream();
    if let Ok(value) = mime.essence_str().parse() {
        headers.insert(header::CONTENT_TYPE, value);
    }

    // Names are unique and never rebound, so the bytes are stable
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("public, max-age=3600"),
    );

    Ok(response)
}
