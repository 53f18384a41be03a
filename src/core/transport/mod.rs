//! Transport layer for the MCP server.
//!
//! The server speaks newline-delimited JSON-RPC over standard input and
//! output. Standard output carries protocol traffic only; logs go to
//! standard error.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
