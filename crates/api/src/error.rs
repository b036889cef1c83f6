use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_site_cms::GatewayError;
use serde_json::json;

/// Site error type rendered as a JSON error envelope.
///
/// A missing recipe is `NotFound` (404); a CMS that cannot be reached is
/// `Unavailable` (503).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("content backend unavailable: {0}")]
    Unavailable(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "notFound", msg.clone()),
            ApiError::Unavailable(err) => {
                tracing::error!("CMS unavailable: {err}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "cmsUnavailable",
                    "Recipe content is temporarily unavailable".to_string(),
                )
            }
        };

        let body = json!({
            "error": {
                "type": error_type,
                "message": message,
                "statusCode": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
