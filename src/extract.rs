use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body whose rejections render as `400 { "error": ... }`.
///
/// Drop-in replacement for [`axum::Json`] in handler parameters:
/// ```ignore
/// async fn handler(JsonBody(req): JsonBody<CreateGameRequest>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
