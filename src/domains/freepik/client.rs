//! reqwest-backed Freepik API client.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::core::config::FreepikConfig;

use super::api::FreepikApi;
use super::error::{ApiError, ApiResult};
use super::models::{GenerateImageParams, ResourceId, SearchResourcesParams, TaskId};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-freepik-api-key";

/// Freepik API client.
///
/// Built once at startup; the underlying `reqwest::Client` and base URL are
/// never mutated afterwards, so clones can be shared freely.
#[derive(Debug, Clone)]
pub struct FreepikClient {
    http: Client,
    base_url: Url,
}

impl FreepikClient {
    /// Create a client for the configured host and API key.
    pub fn new(config: &FreepikConfig) -> ApiResult<Self> {
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ApiError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::invalid_url(&config.base_url, e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The host requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base URL, encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_url(self.base_url.as_str(), "cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue `request` and decode the body without reshaping it.
    async fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await.map_err(|e| {
            error!("Freepik request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Freepik API error");
            return Err(ApiError::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Freepik response received");
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl FreepikApi for FreepikClient {
    async fn search_resources(&self, params: &SearchResourcesParams) -> ApiResult<Value> {
        info!("Searching resources with params: {:?}", params);
        let query = params.to_query_pairs()?;
        let url = self.endpoint(&["v1", "resources"])?;
        self.send(self.http.get(url).query(&query)).await
    }

    async fn get_resource_details(&self, id: ResourceId) -> ApiResult<Value> {
        info!("Getting resource details for id: {}", id);
        let id = id.to_string();
        let url = self.endpoint(&["v1", "resources", &id])?;
        self.send(self.http.get(url)).await
    }

    async fn download_resource(&self, id: ResourceId) -> ApiResult<Value> {
        info!("Downloading resource id: {}", id);
        let id = id.to_string();
        let url = self.endpoint(&["v1", "resources", &id, "download"])?;
        self.send(self.http.get(url)).await
    }

    async fn generate_image(&self, params: &GenerateImageParams) -> ApiResult<Value> {
        info!("Generating image with params: {:?}", params);
        let url = self.endpoint(&["v1", "ai", "mystic"])?;
        self.send(self.http.post(url).json(params)).await
    }

    async fn check_status(&self, task_id: &TaskId) -> ApiResult<Value> {
        info!("Checking status for task: {}", task_id);
        let url = self.endpoint(&["v1", "ai", "mystic", task_id.as_str()])?;
        self.send(self.http.get(url)).await
    }
}
