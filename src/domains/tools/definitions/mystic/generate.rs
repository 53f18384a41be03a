//! Mystic image generation tool.
//!
//! Starts an asynchronous generation task and returns its handle. The image
//! is not produced by this call; clients poll `check_status` with the
//! returned `task_id`.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use serde_json::Value;
use tracing::instrument;

use crate::domains::freepik::FreepikApi;
use crate::domains::freepik::models::GenerateImageParams;
use crate::domains::tools::ToolError;
use crate::domains::tools::validation::{ValidationResult, at_most, decode, non_empty};

/// Upper bound of `creative_detailing`, inclusive. The lower bound is the
/// unsigned type's.
const CREATIVE_DETAILING_MAX: u8 = 100;

/// Generate image tool.
pub struct GenerateImageTool;

impl GenerateImageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_image";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate an image using Freepik Mystic AI";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GenerateImageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn parse(arguments: &JsonObject) -> ValidationResult<GenerateImageParams> {
        let params: GenerateImageParams = decode(arguments)?;
        non_empty("prompt", &params.prompt)?;
        if let Some(detailing) = params.creative_detailing {
            at_most("creative_detailing", detailing, CREATIVE_DETAILING_MAX)?;
        }
        Ok(params)
    }

    #[instrument(skip_all)]
    pub async fn execute(arguments: &JsonObject, api: &dyn FreepikApi) -> Result<Value, ToolError> {
        let params = Self::parse(arguments)?;
        Ok(api.generate_image(&params).await?)
    }
}
