//! Normalization of raw backend post records into the `Post` view model
//!
//! Backend payloads are not consistent: the summary may arrive as `description`,
//! `excerpt` or `summary`, the author as a nested object or a flat `authorName`,
//! tags as objects or plain strings. Each view-model field is resolved from an
//! ordered table of [`FieldSource`]s and the first present, non-empty value wins.
//! Fields that resolve to nothing get a synthesized default, so a normalized
//! [`Post`] never has a hole in it.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Author shown when no source field names one
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Error type for record normalization
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

/// Post identifier, kept in whatever form the backend sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(Number),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId::Number(Number::from(id))
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId::Text(id.to_string())
    }
}

/// Client-side post view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub image_url: String,
    /// ISO-8601 timestamp, passed through from the backend when present
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
}

// ============================================================================
// Field source tables
// ============================================================================

/// One place a view-model field may be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Top-level string field
    Key(&'static str),
    /// String field of a nested object, e.g. `author.username`
    Nested(&'static str, &'static str),
}

impl FieldSource {
    /// Read this source from a record. Non-strings and empty strings count as absent.
    fn read<'a>(&self, record: &'a Map<String, Value>) -> Option<&'a str> {
        let value = match *self {
            FieldSource::Key(key) => record.get(key)?,
            FieldSource::Nested(outer, inner) => record.get(outer)?.get(inner)?,
        };
        value.as_str().filter(|s| !s.is_empty())
    }
}

use FieldSource::{Key, Nested};

pub const TITLE_SOURCES: &[FieldSource] = &[Key("title")];
pub const SLUG_SOURCES: &[FieldSource] = &[Key("slug")];
pub const DESCRIPTION_SOURCES: &[FieldSource] =
    &[Key("description"), Key("excerpt"), Key("summary")];
pub const CONTENT_SOURCES: &[FieldSource] = &[Key("content")];
pub const IMAGE_SOURCES: &[FieldSource] =
    &[Key("imageUrl"), Key("featuredImage"), Key("thumbnail")];
pub const DATE_SOURCES: &[FieldSource] = &[Key("publishedAt"), Key("createdAt"), Key("date")];
pub const AUTHOR_SOURCES: &[FieldSource] = &[
    Nested("author", "name"),
    Nested("author", "username"),
    Key("author"),
    Key("authorName"),
];

/// Evaluate a source table in order and return the first hit
pub fn resolve_field(record: &Map<String, Value>, sources: &[FieldSource]) -> Option<String> {
    sources
        .iter()
        .find_map(|source| source.read(record))
        .map(str::to_string)
}

// ============================================================================
// Pure Helper Functions
// ============================================================================

/// Placeholder image for a post without one
pub fn placeholder_image_url(seed: impl fmt::Display) -> String {
    format!("https://picsum.photos/seed/{seed}/800/600")
}

/// Format a timestamp the way browsers print `Date.toISOString()`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse the date formats the backend is known to emit
///
/// Accepts RFC 3339, zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and
/// bare `YYYY-MM-DD` dates.
pub fn parse_post_date(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn read_id(record: &Map<String, Value>) -> Result<PostId, NormalizeError> {
    match record.get("id") {
        Some(Value::Number(n)) => Ok(PostId::Number(n.clone())),
        Some(Value::String(s)) if !s.is_empty() => Ok(PostId::Text(s.clone())),
        Some(other) => Err(NormalizeError::MalformedRecord(format!(
            "`id` must be a number or a non-empty string, got {}",
            json_kind(other)
        ))),
        None => Err(NormalizeError::MalformedRecord(
            "record has no `id` field".to_string(),
        )),
    }
}

/// Tags arrive either as `{ "name": ... }` objects or as plain strings
fn read_tags(record: &Map<String, Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = record.get("tags") else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name.as_str()),
            Value::Object(tag) => tag.get("name").and_then(Value::as_str),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Pure Transformation Functions
// ============================================================================

/// Normalize one raw backend record into a [`Post`]
///
/// `now` is used when the record carries no date at all. Fails only when the
/// input is not an object or has no usable `id`.
pub fn normalize_post(raw: &Value, now: DateTime<Utc>) -> Result<Post, NormalizeError> {
    let record = raw.as_object().ok_or_else(|| {
        NormalizeError::MalformedRecord(format!("expected an object, got {}", json_kind(raw)))
    })?;

    let id = read_id(record)?;

    Ok(Post {
        title: resolve_field(record, TITLE_SOURCES).unwrap_or_default(),
        slug: resolve_field(record, SLUG_SOURCES).unwrap_or_else(|| id.to_string()),
        description: resolve_field(record, DESCRIPTION_SOURCES).unwrap_or_default(),
        content: resolve_field(record, CONTENT_SOURCES).unwrap_or_default(),
        image_url: resolve_field(record, IMAGE_SOURCES)
            .unwrap_or_else(|| placeholder_image_url(&id)),
        date: resolve_field(record, DATE_SOURCES).unwrap_or_else(|| format_timestamp(now)),
        author: resolve_field(record, AUTHOR_SOURCES)
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
        tags: read_tags(record),
        id,
    })
}

/// Normalize a batch of records, failing on the first malformed one
pub fn normalize_posts<'a, I>(raws: I, now: DateTime<Utc>) -> Result<Vec<Post>, NormalizeError>
where
    I: IntoIterator<Item = &'a Value>,
{
    raws.into_iter().map(|raw| normalize_post(raw, now)).collect()
}

/// Pick the `count` most recent posts
///
/// Posts whose date cannot be parsed sort after every dated post; ties keep
/// their original order.
pub fn featured_posts(mut posts: Vec<Post>, count: usize) -> Vec<Post> {
    posts.sort_by_cached_key(|post| std::cmp::Reverse(parse_post_date(&post.date)));
    posts.truncate(count);
    posts
}
