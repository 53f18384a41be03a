//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed list of tool descriptors advertised to clients
//! - Dispatch of a tool call (name + raw arguments) to its definition
//! - Wrapping of results and failures into the response envelope

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{error, info, instrument, warn};

use crate::domains::freepik::FreepikApi;

use super::{ToolError, UnknownTool};
use super::definitions::common::{error_result, success_result};
use super::definitions::{
    CheckStatusTool, DownloadResourceTool, GenerateImageTool, GetResourceTool,
    SearchResourcesTool,
};

/// Tool registry - dispatches tool calls against a shared API client.
///
/// The registry holds no per-call state; concurrent calls only share the
/// read-only client.
#[derive(Clone)]
pub struct ToolRegistry {
    api: Arc<dyn FreepikApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(api: Arc<dyn FreepikApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            SearchResourcesTool::NAME,
            GetResourceTool::NAME,
            DownloadResourceTool::NAME,
            GenerateImageTool::NAME,
            CheckStatusTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised descriptors.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchResourcesTool::to_tool(),
            GetResourceTool::to_tool(),
            DownloadResourceTool::to_tool(),
            GenerateImageTool::to_tool(),
            CheckStatusTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate definition.
    ///
    /// Returns `Err(UnknownTool)` only for unregistered names.
    /// Validation and remote failures are returned as `Ok` results flagged
    /// with `is_error`, carrying the error message as text.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, UnknownTool> {
        let arguments = arguments.unwrap_or_default();
        let api = self.api.as_ref();

        let outcome = match name {
            SearchResourcesTool::NAME => SearchResourcesTool::execute(&arguments, api).await,
            GetResourceTool::NAME => GetResourceTool::execute(&arguments, api).await,
            DownloadResourceTool::NAME => DownloadResourceTool::execute(&arguments, api).await,
            GenerateImageTool::NAME => GenerateImageTool::execute(&arguments, api).await,
            CheckStatusTool::NAME => CheckStatusTool::execute(&arguments, api).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(UnknownTool(name.to_string()));
            }
        };

        match outcome.and_then(|value| success_result(&value)) {
            Ok(result) => {
                info!("Tool {} completed", name);
                Ok(result)
            }
            Err(e) => {
                match &e {
                    ToolError::InvalidArguments(_) => warn!("Tool {} rejected: {}", name, e),
                    ToolError::Api(api) => {
                        error!(status = ?api.status_code(), "Tool {} failed: {}", name, e)
                    }
                    ToolError::Serialization(_) => error!("Tool {} failed: {}", name, e),
                }
                Ok(error_result(&e.to_string()))
            }
        }
    }
}
