//! Stock content tools: search, detail and download link.

pub mod download;
pub mod resource;
pub mod search;

pub use download::DownloadResourceTool;
pub use resource::GetResourceTool;
pub use search::SearchResourcesTool;
