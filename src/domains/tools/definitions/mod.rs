//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file and exposes its name, description,
//! descriptor, argument parser and `execute()`.

pub mod common;
pub mod mystic;
pub mod stock;

pub use mystic::{CheckStatusTool, GenerateImageTool};
pub use stock::{DownloadResourceTool, GetResourceTool, SearchResourcesTool};
