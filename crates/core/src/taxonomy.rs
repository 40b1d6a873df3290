//! Category and tag view models
//!
//! These endpoints are better behaved than the post ones, so plain serde
//! deserialization is enough. Optional fields cover the difference between
//! the summary and the with-post-count payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::post::NormalizeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hex color code, e.g. `#3498DB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
}

fn parse_list<T: serde::de::DeserializeOwned>(
    body: Value,
    what: &str,
) -> Result<Vec<T>, NormalizeError> {
    serde_json::from_value(body)
        .map_err(|e| NormalizeError::MalformedRecord(format!("invalid {what} list: {e}")))
}

/// Parse a `/categories` style response body
pub fn parse_categories(body: Value) -> Result<Vec<Category>, NormalizeError> {
    parse_list(body, "category")
}

/// Parse a `/tags` style response body
pub fn parse_tags(body: Value) -> Result<Vec<Tag>, NormalizeError> {
    parse_list(body, "tag")
}
