use profile_domain::error::ProfileError;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON request body that rejects with the service's own `Invalid JSON` error.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type`. An empty body is not JSON.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Like [`JsonBody`], except that a missing body yields `T::default()`.
#[derive(Debug)]
pub struct JsonBodyOrDefault<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ProfileError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(request, state).await?;

        parse_json_body(&bytes).map(JsonBody)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBodyOrDefault<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ProfileError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(request, state).await?;

        if is_blank(&bytes) {
            return Ok(JsonBodyOrDefault(T::default()));
        }
        parse_json_body(&bytes).map(JsonBodyOrDefault)
    }
}

async fn read_body<S: Send + Sync>(request: Request, state: &S) -> Result<Bytes, ProfileError> {
    Bytes::from_request(request, state)
        .await
        .map_err(|_| ProfileError::InvalidJson)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProfileError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!("rejected request body: {e}");
        ProfileError::InvalidJson
    })
}
