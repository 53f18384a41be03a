//! Request models for the Freepik API.
//!
//! The parameter structs double as tool inputs: they are decoded from the
//! caller's argument object, advertised through their JSON Schema, and
//! serialized verbatim into query strings or JSON bodies. Responses are not
//! modelled; the client hands back the remote body untouched.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a stock resource. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Returns `None` for 0.
    pub fn new(id: u64) -> Option<Self> {
        (id >= 1).then_some(Self(id))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle of a Mystic generation task. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        (!id.is_empty()).then_some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Stock search parameters
// ============================================================================

/// Query for `GET /v1/resources`. Absent fields use the remote default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchResourcesParams {
    #[schemars(description = "Search term")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    #[schemars(description = "Page number")]
    #[schemars(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[schemars(description = "Limit results per page")]
    #[schemars(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[schemars(description = "Sort order")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SearchOrder>,

    #[schemars(description = "Filters narrowing the result set")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
}

impl SearchResourcesParams {
    /// Flatten into query pairs, nesting filters with bracket notation
    /// (`filters[orientation][landscape]=true`).
    pub fn to_query_pairs(&self) -> serde_json::Result<Vec<(String, String)>> {
        let value = serde_json::to_value(self)?;
        let mut pairs = Vec::new();
        flatten_query(None, &value, &mut pairs);
        Ok(pairs)
    }
}

fn flatten_query(prefix: Option<&str>, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let key = match prefix {
                    Some(prefix) => format!("{prefix}[{key}]"),
                    None => key.clone(),
                };
                flatten_query(Some(&key), nested, out);
            }
        }
        Value::Array(items) => {
            let key = prefix.map(|prefix| format!("{prefix}[]"));
            for item in items {
                flatten_query(key.as_deref(), item, out);
            }
        }
        Value::Null => {}
        Value::String(text) => {
            if let Some(prefix) = prefix {
                out.push((prefix.to_string(), text.clone()));
            }
        }
        scalar => {
            if let Some(prefix) = prefix {
                out.push((prefix.to_string(), scalar.to_string()));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    Relevance,
    Recent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchFilters {
    #[schemars(description = "Orientations to include")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<OrientationFilter>,

    #[schemars(description = "Content types to include")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentTypeFilter>,

    #[schemars(description = "Licenses to include")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseFilter>,

    #[schemars(description = "People appearing in the resource")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<PeopleFilter>,

    #[schemars(description = "Predominant color")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OrientationFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panoramic: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentTypeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psd: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LicenseFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freemium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PeopleFilter {
    #[schemars(description = "Only resources with people")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<bool>,

    #[schemars(description = "Only resources without people")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,

    #[schemars(description = "Number of people")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<PeopleCount>,

    #[schemars(description = "Age group of people")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<PeopleAge>,

    #[schemars(description = "Gender of people")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[schemars(description = "Ethnicity of people")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<Ethnicity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PeopleCount {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "more_than_three")]
    MoreThanThree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PeopleAge {
    Infant,
    Child,
    Teen,
    YoungAdult,
    Adult,
    Senior,
    Elder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Ethnicity {
    SouthAsian,
    MiddleEastern,
    EastAsian,
    Black,
    Hispanic,
    Indian,
    White,
    Multiracial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Red,
    White,
    Yellow,
    Purple,
    Cyan,
    Pink,
}

// ============================================================================
// Mystic generation parameters
// ============================================================================

/// Body of `POST /v1/ai/mystic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GenerateImageParams {
    #[schemars(description = "Text description of the image to generate")]
    #[schemars(length(min = 1))]
    pub prompt: String,

    #[schemars(description = "Image resolution")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,

    #[schemars(description = "Image aspect ratio")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,

    #[schemars(description = "Reference image guiding the composition")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_reference: Option<String>,

    #[schemars(description = "Reference image guiding the style")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_reference: Option<String>,

    #[schemars(description = "Enable realistic style")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realism: Option<bool>,

    #[schemars(description = "AI engine to use")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,

    #[schemars(description = "Level of creative detail")]
    #[schemars(range(min = 0, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_detailing: Option<u8>,

    #[schemars(description = "Filter NSFW content")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_nsfw: Option<bool>,
}

impl GenerateImageParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            resolution: None,
            aspect_ratio: None,
            structure_reference: None,
            style_reference: None,
            realism: None,
            engine: None,
            creative_detailing: None,
            filter_nsfw: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Resolution {
    #[serde(rename = "2k")]
    TwoK,
    #[serde(rename = "4k")]
    FourK,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AspectRatio {
    #[serde(rename = "square_1_1")]
    Square,
    #[serde(rename = "classic_4_3")]
    Classic,
    #[serde(rename = "traditional_3_4")]
    Traditional,
    #[serde(rename = "widescreen_16_9")]
    Widescreen,
    #[serde(rename = "social_story_9_16")]
    SocialStory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    Automatic,
    MagnificIllusio,
    MagnificSharpy,
    MagnificSparkle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_id_lower_bound() {
        assert!(ResourceId::new(0).is_none());
        assert_eq!(ResourceId::new(1).map(ResourceId::get), Some(1));
        assert_eq!(ResourceId::new(42).unwrap().to_string(), "42");
    }

    #[test]
    fn test_task_id_rejects_empty() {
        assert!(TaskId::new("").is_none());
        assert_eq!(TaskId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_search_query_pairs_use_bracket_notation() {
        let params = SearchResourcesParams {
            term: Some("cats".to_string()),
            page: Some(2),
            order: Some(SearchOrder::Recent),
            filters: Some(SearchFilters {
                orientation: Some(OrientationFilter {
                    landscape: Some(true),
                    ..Default::default()
                }),
                people: Some(PeopleFilter {
                    number: Some(PeopleCount::MoreThanThree),
                    age: Some(PeopleAge::YoungAdult),
                    ..Default::default()
                }),
                color: Some(Color::Pink),
                ..Default::default()
            }),
            ..Default::default()
        };

        let pairs = params.to_query_pairs().unwrap();
        let has = |k: &str, v: &str| pairs.iter().any(|(pk, pv)| pk == k && pv == v);

        assert!(has("term", "cats"));
        assert!(has("page", "2"));
        assert!(has("order", "recent"));
        assert!(has("filters[orientation][landscape]", "true"));
        assert!(has("filters[people][number]", "more_than_three"));
        assert!(has("filters[people][age]", "young-adult"));
        assert!(has("filters[color]", "pink"));
        assert!(!pairs.iter().any(|(k, _)| k == "limit"));
        assert_eq!(pairs.len(), 7);
    }

    #[test]
    fn test_empty_search_has_no_pairs() {
        let pairs = SearchResourcesParams::default().to_query_pairs().unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_generate_body_omits_absent_fields() {
        let mut params = GenerateImageParams::new("a lighthouse");
        params.aspect_ratio = Some(AspectRatio::Widescreen);
        params.resolution = Some(Resolution::FourK);
        params.creative_detailing = Some(0);

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "prompt": "a lighthouse",
                "aspect_ratio": "widescreen_16_9",
                "resolution": "4k",
                "creative_detailing": 0
            })
        );
    }

    #[test]
    fn test_enum_wire_spellings() {
        let cases = [
            (serde_json::to_value(PeopleCount::One).unwrap(), "1"),
            (serde_json::to_value(PeopleAge::YoungAdult).unwrap(), "young-adult"),
            (serde_json::to_value(Ethnicity::MiddleEastern).unwrap(), "middle-eastern"),
            (serde_json::to_value(Resolution::TwoK).unwrap(), "2k"),
            (serde_json::to_value(AspectRatio::SocialStory).unwrap(), "social_story_9_16"),
            (serde_json::to_value(Engine::MagnificIllusio).unwrap(), "magnific_illusio"),
        ];
        for (value, expected) in cases {
            assert_eq!(value, json!(expected));
        }
    }

    #[test]
    fn test_search_params_reject_unknown_fields() {
        let result: Result<SearchResourcesParams, _> =
            serde_json::from_value(json!({"filters": {"size": "big"}}));
        assert!(result.is_err());
    }
}
