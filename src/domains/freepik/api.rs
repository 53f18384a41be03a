//! The seam between the tool dispatcher and the remote API.

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiResult;
use super::models::{GenerateImageParams, ResourceId, SearchResourcesParams, TaskId};

/// Operations exposed by the Freepik API.
///
/// Each method maps to exactly one outbound request and returns the decoded
/// response body as-is. Implementations must be safe to share across
/// concurrent tool calls without locking.
#[async_trait]
pub trait FreepikApi: Send + Sync {
    /// `GET /v1/resources`
    async fn search_resources(&self, params: &SearchResourcesParams) -> ApiResult<Value>;

    /// `GET /v1/resources/{id}`
    async fn get_resource_details(&self, id: ResourceId) -> ApiResult<Value>;

    /// `GET /v1/resources/{id}/download`
    async fn download_resource(&self, id: ResourceId) -> ApiResult<Value>;

    /// `POST /v1/ai/mystic`. Starts a task; does not wait for the image.
    async fn generate_image(&self, params: &GenerateImageParams) -> ApiResult<Value>;

    /// `GET /v1/ai/mystic/{task_id}`
    async fn check_status(&self, task_id: &TaskId) -> ApiResult<Value>;
}
