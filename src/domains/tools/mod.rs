//! Tools domain module.
//!
//! Tools are the operations MCP clients can invoke. Each one decodes its
//! raw arguments into a typed parameter struct at the boundary and then
//! calls the Freepik API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `validation.rs` - serde decoding of argument objects plus range checks
//! - `registry.rs` - Advertised descriptors and call dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a `Deserialize + JsonSchema`
//!    parameter struct and a tool type exposing `NAME`, `to_tool()`,
//!    `parse()` and `execute()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `tool_names()`, `get_all_tools()` and the dispatch match in
//!    `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod validation;

pub use error::{ToolError, UnknownTool};
pub use registry::ToolRegistry;
pub use validation::{ValidationError, ValidationResult};
