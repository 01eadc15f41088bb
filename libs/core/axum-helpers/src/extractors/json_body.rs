//! JSON extractor that reports malformed bodies through the error normalizer.

use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but maps deserialization rejections (missing
/// body, wrong content type, type mismatches such as a non-numeric price)
/// into the standard error envelope as a `Validation` failure, so clients
/// never see axum's plain-text rejection format.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                Err(AppError::Validation(rejection.body_text()).into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Router};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        value: i64,
    }

    async fn accept(JsonBody(_payload): JsonBody<Payload>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/", post(accept))
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"value": 1}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_renders_envelope() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"value": "not a number"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["type"], "Validation");
        assert_eq!(body["error"]["status"], 400);
    }
}
