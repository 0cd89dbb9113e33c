use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Unified application error type that maps to JSON HTTP responses.
///
/// Every error renders as `{ "error": "<message>" }`; an unmatched route also echoes its `path`.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request: missing or malformed input
    BadRequest(String),
    /// 404 Not Found: the referenced document does not exist
    NotFound(String),
    /// 404 Not Found: no handler matches the request path
    RouteNotFound(String),
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            Self::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Route not found", "path": path }),
            ),
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Allow `?` to automatically convert any `anyhow::Error` (and so any store error) into `AppError::Internal`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map(http_body_util::Collected::to_bytes)
            .unwrap_or_default();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let (status, json) = render(AppError::BadRequest("Title is required".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Title is required");
    }

    #[tokio::test]
    async fn test_route_not_found_echoes_path() {
        let (status, json) = render(AppError::RouteNotFound("/api/nope".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["path"], "/api/nope");
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let err: AppError = sea_orm::DbErr::Custom("connection reset".to_string()).into();
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }
}
