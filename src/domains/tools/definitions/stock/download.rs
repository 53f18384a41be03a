//! Stock resource download tool.
//!
//! Returns a short-lived download link; the file itself is never fetched.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::freepik::FreepikApi;
use crate::domains::freepik::models::ResourceId;
use crate::domains::tools::ToolError;
use crate::domains::tools::validation::{ValidationError, ValidationResult, decode};

/// Parameters for the download resource tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DownloadResourceParams {
    #[schemars(description = "Resource ID to download")]
    #[schemars(range(min = 1))]
    pub id: u64,
}

/// Download resource tool.
pub struct DownloadResourceTool;

impl DownloadResourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "download_resource";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get download URL for a specific resource";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DownloadResourceParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn parse(arguments: &JsonObject) -> ValidationResult<ResourceId> {
        let params: DownloadResourceParams = decode(arguments)?;
        ResourceId::new(params.id)
            .ok_or_else(|| ValidationError::new("id", "must be greater than or equal to 1"))
    }

    #[instrument(skip_all)]
    pub async fn execute(arguments: &JsonObject, api: &dyn FreepikApi) -> Result<Value, ToolError> {
        let id = Self::parse(arguments)?;
        Ok(api.download_resource(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rejects_extra_fields() {
        let args = json!({"id": 7, "format": "zip"}).as_object().cloned().unwrap();
        let err = DownloadResourceTool::parse(&args).unwrap_err();
        assert!(err.constraint.starts_with("unknown field `format`"));
    }

    #[test]
    fn test_parse_zero_id() {
        let args = json!({"id": 0}).as_object().cloned().unwrap();
        let err = DownloadResourceTool::parse(&args).unwrap_err();
        assert_eq!(err.to_string(), "id: must be greater than or equal to 1");
    }

    #[test]
    fn test_schema_is_closed() {
        let tool = DownloadResourceTool::to_tool();
        assert_eq!(tool.input_schema["additionalProperties"], false);
        assert_eq!(tool.input_schema["required"], json!(["id"]));
    }
}
