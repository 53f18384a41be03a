//! Stock resource search tool.
//!
//! Searches photos, vectors and PSDs with optional paging, ordering and
//! nested filters. Absent fields are left to the remote defaults.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use serde_json::Value;
use tracing::instrument;

use crate::domains::freepik::FreepikApi;
use crate::domains::freepik::models::SearchResourcesParams;
use crate::domains::tools::ToolError;
use crate::domains::tools::validation::{ValidationResult, at_least, decode};

/// Search resources tool.
pub struct SearchResourcesTool;

impl SearchResourcesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_resources";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search for Freepik resources (photos, vectors, PSDs) with filters";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchResourcesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Decode and validate raw arguments.
    pub fn parse(arguments: &JsonObject) -> ValidationResult<SearchResourcesParams> {
        let params: SearchResourcesParams = decode(arguments)?;
        if let Some(page) = params.page {
            at_least("page", page, 1)?;
        }
        if let Some(limit) = params.limit {
            at_least("limit", limit, 1)?;
        }
        Ok(params)
    }

    /// Validate, search, and return the raw result page.
    #[instrument(skip_all)]
    pub async fn execute(arguments: &JsonObject, api: &dyn FreepikApi) -> Result<Value, ToolError> {
        let params = Self::parse(arguments)?;
        Ok(api.search_resources(&params).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::freepik::models::{Color, ContentTypeFilter, Gender, SearchOrder};
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_arguments_are_valid() {
        let params = SearchResourcesTool::parse(&JsonObject::new()).unwrap();
        assert_eq!(params, SearchResourcesParams::default());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let params =
            SearchResourcesTool::parse(&object(json!({"term": null, "filters": null}))).unwrap();
        assert_eq!(params, SearchResourcesParams::default());
    }

    #[test]
    fn test_fields_pass_through_unchanged() {
        let params = SearchResourcesTool::parse(&object(json!({
            "term": "mountain lake",
            "page": 1,
            "limit": 50,
            "order": "relevance",
            "filters": {
                "content_type": {"photo": true, "vector": false},
                "license": {"freemium": true},
                "people": {"exclude": true, "gender": "female"},
                "color": "blue"
            }
        })))
        .unwrap();

        assert_eq!(params.term.as_deref(), Some("mountain lake"));
        assert_eq!(params.page, Some(1));
        assert_eq!(params.limit, Some(50));
        assert_eq!(params.order, Some(SearchOrder::Relevance));

        let filters = params.filters.unwrap();
        assert_eq!(
            filters.content_type,
            Some(ContentTypeFilter {
                photo: Some(true),
                psd: None,
                vector: Some(false),
            })
        );
        assert_eq!(filters.license.unwrap().freemium, Some(true));
        let people = filters.people.unwrap();
        assert_eq!(people.exclude, Some(true));
        assert_eq!(people.gender, Some(Gender::Female));
        assert_eq!(filters.color, Some(Color::Blue));
        assert!(filters.orientation.is_none());
    }

    #[test]
    fn test_page_and_limit_must_be_positive() {
        for (args, field) in [(json!({"page": 0}), "page"), (json!({"limit": 0}), "limit")] {
            let err = SearchResourcesTool::parse(&object(args)).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.constraint, "must be greater than or equal to 1");
        }

        let err = SearchResourcesTool::parse(&object(json!({"limit": -4}))).unwrap_err();
        assert_eq!(err.field, "limit");
    }

    #[test]
    fn test_order_must_be_known() {
        let err = SearchResourcesTool::parse(&object(json!({"order": "popular"}))).unwrap_err();
        assert_eq!(err.field, "order");
        assert!(err.constraint.starts_with("unknown variant `popular`"));
    }

    #[test]
    fn test_nested_filter_errors_name_path() {
        let err = SearchResourcesTool::parse(&object(json!({
            "filters": {"people": {"age": "ancient"}}
        })))
        .unwrap_err();
        assert_eq!(err.field, "filters.people.age");

        let err = SearchResourcesTool::parse(&object(json!({
            "filters": {"orientation": {"diagonal": true}}
        })))
        .unwrap_err();
        assert!(err.constraint.starts_with("unknown field `diagonal`"));
    }

    #[test]
    fn test_schema_shape() {
        let schema = SearchResourcesTool::to_tool().input_schema;
        assert_eq!(schema["type"], "object");
        assert!(!schema.contains_key("required"));
        assert_eq!(schema["additionalProperties"], false);
        let properties = schema["properties"].as_object().unwrap();
        for key in ["term", "page", "limit", "order", "filters"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }
}
