//! Mystic task status tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domains::freepik::FreepikApi;
use crate::domains::freepik::models::TaskId;
use crate::domains::tools::ToolError;
use crate::domains::tools::validation::{ValidationError, ValidationResult, decode};

/// Parameters for the check status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckStatusParams {
    #[schemars(description = "ID of the generation task to check")]
    #[schemars(length(min = 1))]
    pub task_id: String,
}

/// Check status tool - polls a generation task.
pub struct CheckStatusTool;

impl CheckStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check the status of a Mystic image generation task";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CheckStatusParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn parse(arguments: &JsonObject) -> ValidationResult<TaskId> {
        let params: CheckStatusParams = decode(arguments)?;
        TaskId::new(params.task_id)
            .ok_or_else(|| ValidationError::new("task_id", "must not be empty"))
    }

    #[instrument(skip_all)]
    pub async fn execute(arguments: &JsonObject, api: &dyn FreepikApi) -> Result<Value, ToolError> {
        let task_id = Self::parse(arguments)?;
        Ok(api.check_status(&task_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_id_required_and_non_empty() {
        let missing = JsonObject::new();
        assert_eq!(
            CheckStatusTool::parse(&missing).unwrap_err().constraint,
            "missing field `task_id`"
        );

        let empty = json!({"task_id": ""}).as_object().cloned().unwrap();
        assert_eq!(
            CheckStatusTool::parse(&empty).unwrap_err().to_string(),
            "task_id: must not be empty"
        );

        let numeric = json!({"task_id": 17}).as_object().cloned().unwrap();
        let err = CheckStatusTool::parse(&numeric).unwrap_err();
        assert_eq!(err.field, "task_id");
        assert!(err.constraint.starts_with("invalid type: integer `17`"));
    }

    #[test]
    fn test_task_id_is_opaque() {
        let args = json!({"task_id": "0b6f1c3e-task/with?odd chars"})
            .as_object()
            .cloned()
            .unwrap();
        let task_id = CheckStatusTool::parse(&args).unwrap();
        assert_eq!(task_id.as_str(), "0b6f1c3e-task/with?odd chars");
    }

    #[test]
    fn test_schema_requires_task_id() {
        let tool = CheckStatusTool::to_tool();
        assert_eq!(tool.input_schema["required"], json!(["task_id"]));
        assert_eq!(tool.input_schema["properties"]["task_id"]["minLength"], 1);
    }
}
