//! Common utilities shared across tool definitions.
//!
//! Helpers that wrap results and failures into the response envelope.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::domains::tools::ToolError;

/// Serialize a tool result as pretty-printed JSON text.
pub fn success_result<T: Serialize>(value: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Create an error result carrying the message as text.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_result_is_pretty_json() {
        let result = success_result(&json!({"url": "https://x"})).unwrap();
        assert_eq!(result.is_error, Some(false));
        let text = result.content[0].raw.as_text().map(|t| t.text.clone()).unwrap();
        assert_eq!(text, "{\n  \"url\": \"https://x\"\n}");
    }

    #[test]
    fn test_success_result_keeps_nulls() {
        let result = success_result(&json!({"title": null})).unwrap();
        let text = result.content[0].raw.as_text().map(|t| t.text.clone()).unwrap();
        assert_eq!(text, "{\n  \"title\": null\n}");
    }

    #[test]
    fn test_error_result_flagged() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
    }
}
