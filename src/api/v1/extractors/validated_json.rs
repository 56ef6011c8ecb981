/*
 * Responsibility
 * - JSON body → DTO への変換 + DTO の形式チェック (validate)
 * - 失敗はすべて 400 {"error": "..."} にそろえる (service には到達させない)
 */
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Shape checks a DTO runs after deserialization. Business rules belong to the service.
pub trait Validate {
    fn validate(&self) -> Result<(), &'static str>;
}

/// `Json<T>` whose payload has also passed `T::validate()`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(status = %rejection.status(), "json body rejected");
    AppError::bad_request(rejection.body_text())
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate().map_err(AppError::bad_request)?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{self, header},
    };
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    impl Validate for Payload {
        fn validate(&self) -> Result<(), &'static str> {
            if self.name.is_empty() {
                return Err("name is required");
            }
            Ok(())
        }
    }

    fn json_request(body: &'static str) -> Request {
        http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(req: Request) -> Result<ValidatedJson<Payload>, AppError> {
        ValidatedJson::<Payload>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let ValidatedJson(payload) = extract(json_request(r#"{"name":"x"}"#)).await.unwrap();
        assert_eq!(payload.name, "x");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request_with_field_name() {
        let err = extract(json_request("{}")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().contains("name"), "{err}");
    }

    #[tokio::test]
    async fn type_mismatch_and_syntax_errors_are_bad_request() {
        for body in [r#"{"name":1}"#, "{not json"] {
            let err = extract(json_request(body)).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{body}: {err:?}");
        }
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let req = http::Request::builder()
            .method("POST")
            .body(Body::from(r#"{"name":"x"}"#))
            .unwrap();

        let err = extract(req).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn failed_validation_is_bad_request_with_message() {
        let err = extract(json_request(r#"{"name":""}"#)).await.unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }
}
