use std::path::Path;

use async_trait::async_trait;
use mlconsole_core::models::{
    BackendMessage, FreezeRequest, ModelResults, TrainRequest, TransformRequest,
};

use crate::ApiError;

/// The remote operations the console can ask of the ML backend. Each call is a
/// single request with no retry, timeout or cancellation.
#[async_trait]
pub trait MlBackend: Send + Sync {
    /// `POST /upload` with the dataset as the multipart `file` field
    async fn upload(&self, file: &Path) -> Result<ModelResults, ApiError>;

    /// `POST /transform`
    async fn transform(&self, request: &TransformRequest) -> Result<BackendMessage, ApiError>;

    /// `POST /train`
    async fn train(&self, request: &TrainRequest) -> Result<ModelResults, ApiError>;

    /// `POST /freeze`
    async fn freeze(&self, request: &FreezeRequest) -> Result<BackendMessage, ApiError>;
}
