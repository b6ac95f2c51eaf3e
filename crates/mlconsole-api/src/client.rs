use std::path::Path;

use async_trait::async_trait;
use log::{debug, info};
use mlconsole_core::{
    models::{BackendMessage, FreezeRequest, ModelResults, TrainRequest, TransformRequest},
    operations::Operation,
    utils::{get_backend_url, normalise_origin},
};
use reqwest::{Client, Response, multipart};
use serde::{Serialize, de::DeserializeOwned};

use crate::{ApiError, MlBackend};

/// HTTP client for the ML backend. Cheap to clone: the underlying reqwest
/// client shares its connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Client for the configured backend origin (`MLCONSOLE_BACKEND_URL`)
    pub fn new() -> Self {
        Self::with_base_url(get_backend_url())
    }

    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            http: Client::new(),
            base_url: normalise_origin(base_url.as_ref()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, op: Operation) -> String {
        format!("{}{}", self.base_url, op.endpoint())
    }

    async fn post_json<B, T>(&self, op: Operation, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(op);
        debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        read_json(response).await
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Any non-success status is an error, and so is a body that doesn't parse
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("failed to parse response: {e}")))
}

#[async_trait]
impl MlBackend for BackendClient {
    async fn upload(&self, file: &Path) -> Result<ModelResults, ApiError> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("dataset"));
        info!("Uploading {} ({} bytes)", file_name, bytes.len());

        let form =
            multipart::Form::new().part("file", multipart::Part::bytes(bytes).file_name(file_name));
        let url = self.url(Operation::Ingest);
        debug!("POST {}", url);
        let response = self.http.post(&url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn transform(&self, request: &TransformRequest) -> Result<BackendMessage, ApiError> {
        self.post_json(Operation::Transform, request).await
    }

    async fn train(&self, request: &TrainRequest) -> Result<ModelResults, ApiError> {
        self.post_json(Operation::Train, request).await
    }

    async fn freeze(&self, request: &FreezeRequest) -> Result<BackendMessage, ApiError> {
        self.post_json(Operation::Freeze, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = BackendClient::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.url(Operation::Ingest), "http://127.0.0.1:5000/upload");
        assert_eq!(client.url(Operation::Train), "http://127.0.0.1:5000/train");
    }
}
