//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool discovery and tool calls to the
//! [`ToolRegistry`].
//!
//! Unknown tool names are protocol faults (`-32601`). Every other failure is
//! reported inside an error-flagged tool result so the session stays usable.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::freepik::{FreepikApi, FreepikClient};
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap to
/// clone; all clones share the same API client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry dispatching calls to the Freepik API.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server talking to the configured Freepik host.
    pub fn new(config: Config) -> Result<Self> {
        let client = FreepikClient::new(&config.freepik)?;
        info!("Freepik API host: {}", client.base_url());
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server backed by an arbitrary API implementation.
    pub fn with_api(config: Config, api: Arc<dyn FreepikApi>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(api)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// All advertised tool descriptors.
    pub fn tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Run a tool call. Only an unregistered name becomes a protocol error.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| McpError::new(ErrorCode::METHOD_NOT_FOUND, e.to_string(), None))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(
                "Freepik MCP server. Use search_resources, get_resource and \
                 download_resource for the stock catalogue. Start an image with \
                 generate_image, then poll check_status with the returned task_id."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.execute_tool(&request.name, request.arguments).await
    }
}
