use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::object_store::ObjectStoreError;
use crate::storage::DatabaseError;

// ============================================================================
// Success envelope
// ============================================================================

/// `{"success": "..."}` body returned by create and delete routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub success: String,
}

impl SuccessMessage {
    pub fn json(message: impl Into<String>) -> Json<SuccessMessage> {
        Json(SuccessMessage {
            success: message.into(),
        })
    }
}

// ============================================================================
// Error envelope
// ============================================================================

/// `{"error": "..."}` body returned by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

/// What went wrong, independent of how it is reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Constraint,
    Internal,
    Io,
    NotFound,
}

/// Handler error: a kind, the status it is reported with, and a message.
///
/// Client-side kinds all default to 400, which is what the API has always
/// returned; `with_status` overrides it where a route needs something else.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: StatusCode,
    pub message: String,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorMessage {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl ApiError {
    fn new(kind: ErrorKind, status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            kind,
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, StatusCode::BAD_REQUEST, message)
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Constraint, StatusCode::BAD_REQUEST, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Internal,
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
        )
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<DatabaseError> for ApiError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::Constraint(_) => ApiError::constraint(e.to_string()),
            _ => {
                tracing::error!(error = %e, "Database operation failed");
                ApiError::internal(e.to_string())
            }
        }
    }
}

impl From<ObjectStoreError> for ApiError {
    fn from(e: ObjectStoreError) -> Self {
        match e {
            ObjectStoreError::InvalidKey(_) => ApiError::bad_request(e.to_string()),
            ObjectStoreError::NotFound(_) => ApiError::not_found(e.to_string()),
            ObjectStoreError::Io(_) => ApiError::io(e.to_string()),
        }
    }
}

// ============================================================================
// Custom extractors (reject with `{"error": ...}` bodies)
// ============================================================================

/// Drop-in replacement for `axum::Json` that rejects with an `ApiError`.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, ApiError> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                let message = match rejection {
                    JsonRejection::JsonDataError(err) => {
                        format!("Invalid request body: {}", err.body_text())
                    }
                    JsonRejection::JsonSyntaxError(_) => "Malformed JSON in request body".into(),
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing Content-Type: application/json header".into()
                    }
                    _ => "Failed to read request body".into(),
                };
                Err(ApiError::bad_request(message))
            }
        }
    }
}

/// Drop-in replacement for `axum::extract::Path` that rejects with an `ApiError`.
pub struct AppPath<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, ApiError> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(AppPath(value)),
            Err(rejection) => Err(ApiError::bad_request(friendly_path_error(
                &rejection.body_text(),
            ))),
        }
    }
}

/// Translate serde path errors into human-friendly descriptions.
fn friendly_path_error(raw: &str) -> String {
    let cleaned = raw
        .replace("u64", "non-negative integer")
        .replace("i64", "integer");

    format!("Invalid id: {cleaned}")
}
