//! Mystic AI tools: start a generation task and poll its status.

pub mod generate;
pub mod status;

pub use generate::GenerateImageTool;
pub use status::CheckStatusTool;
