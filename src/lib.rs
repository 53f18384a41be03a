//! Freepik MCP Server Library
//!
//! This crate exposes the Freepik stock catalogue and the Mystic image
//! generation API to MCP clients as five tools served over stdio.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the protocol handler and the
//!   stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **freepik**: typed request parameters and the HTTP client
//!   - **tools**: tool descriptors, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use freepik_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
