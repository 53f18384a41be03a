//! Stock resource detail tool.

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

/// Parameters for the get resource tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetResourceParams {
    #[schemars(description = "Resource ID to get details for")]
    #[schemars(range(min = 1))]
    pub id: u64,
}

/// Get resource tool - full metadata of a single resource.
pub struct GetResourceTool;

impl GetResourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_resource";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a specific resource";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetResourceParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn parse(arguments: &JsonObject) -> ValidationResult<ResourceId> {
        let params: GetResourceParams = decode(arguments)?;
        ResourceId::new(params.id)
            .ok_or_else(|| ValidationError::new("id", "must be greater than or equal to 1"))
    }

    #[instrument(skip_all)]
    pub async fn execute(arguments: &JsonObject, api: &dyn FreepikApi) -> Result<Value, ToolError> {
        let id = Self::parse(arguments)?;
        Ok(api.get_resource_details(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ValidationResult<ResourceId> {
        GetResourceTool::parse(value.as_object().unwrap())
    }

    #[test]
    fn test_schema_requires_id() {
        let tool = GetResourceTool::to_tool();
        assert_eq!(tool.input_schema["type"], "object");
        assert_eq!(tool.input_schema["required"], json!(["id"]));
        assert_eq!(tool.input_schema["properties"]["id"]["minimum"], 1);
    }

    #[test]
    fn test_parse_accepts_lower_bound() {
        assert_eq!(parse(json!({"id": 1})).unwrap().get(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_ids() {
        for bad in [json!({"id": 0}), json!({"id": -3}), json!({"id": 2.5}), json!({"id": "42"})] {
            let err = parse(bad.clone()).unwrap_err();
            assert_eq!(err.field, "id", "{bad} should be rejected on id");
        }
        assert!(parse(json!({})).is_err());
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        let err = parse(json!({"id": 1, "fields": "all"})).unwrap_err();
        assert!(err.constraint.starts_with("unknown field `fields`"));
    }
}
