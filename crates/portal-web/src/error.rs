// HTTP surface for auth-layer errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use portal_auth::AuthError;

/// API error with HTTP status code, error code, and human-readable message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        let status = match &e {
            AuthError::ProviderNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::Config(_) | AuthError::Url(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError {
            status,
            code: e.code(),
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "message": self.message,
                "code": self.code,
                "status": self.status.as_u16(),
            }
        });

        (self.status, Json(body)).into_response()
    }
}
