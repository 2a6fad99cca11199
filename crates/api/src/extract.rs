use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::ApiError;

/// JSON body extractor for the mock routes.
///
/// Unlike `axum::Json` it ignores `Content-Type`, treats an empty body as
/// `T::default()` and reports parse failures as [`ApiError::MalformedRequest`].
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            // Well-formed JSON of the wrong shape is a different complaint than broken syntax.
            let what = match e.classify() {
                Category::Data => "invalid request body",
                Category::Syntax | Category::Eof | Category::Io => "invalid JSON body",
            };
            ApiError::MalformedRequest(format!("{what}: {e}"))
        })
    }
}
