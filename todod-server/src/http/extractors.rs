//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON request body whose rejection is the contract 400 response.
///
/// An absent or undecodable body surfaces as `Invalid data.` instead of
/// axum's default rejection.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidPayload))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;

    #[derive(serde::Deserialize)]
    struct Dummy {
        #[serde(default)]
        flag: bool,
    }

    #[tokio::test]
    async fn missing_body_rejects_with_invalid_data() {
        let req = Request::builder().body(Body::empty()).unwrap();

        let err = Payload::<Dummy>::from_request(req, &()).await.err().unwrap();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidPayload)
        ));
    }

    #[tokio::test]
    async fn json_body_is_decoded() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"flag": true}"#))
            .unwrap();

        let Payload(dummy) = Payload::<Dummy>::from_request(req, &()).await.ok().unwrap();
        assert!(dummy.flag);
    }
}
