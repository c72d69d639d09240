//! Validated extractors wrapping axum's Json and Query.
//!
//! Deserialization failures become `AppError::BadRequest`; `validator`
//! failures become `AppError::ValidationErrors` with per-field messages.

use axum::extract::{FromRequest, FromRequestParts, Json, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON body extractor that runs `validator` rules after deserialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor that runs `validator` rules after deserialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_json() {
        let request = json_request(r#"{"name": "Vedha", "email": "vedha@gmail.com"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.name, "Vedha");
    }

    #[tokio::test]
    async fn rejects_invalid_field_with_validation_errors() {
        let request = json_request(r#"{"name": "Vedha", "email": "nope"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[0].message, "Invalid email format");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_malformed_json_as_bad_request() {
        let request = json_request("{not json");
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn query_extractor_validates_fields() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/test?name=&email=vedha@gmail.com")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let result = ValidatedQuery::<TestPayload>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::ValidationErrors { .. })));
    }
}
