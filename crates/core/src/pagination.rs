//! Pagination arithmetic and backend page envelopes
//!
//! Client-facing pages are 1-indexed. The backend (Spring Data) counts pages
//! from zero, so [`PageRequest::wire_page`] does the conversion in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::post::{normalize_post, NormalizeError, Post};

/// Page size used when the caller does not choose one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A page of view models plus the totals needed to render navigation
///
/// `current_page` echoes the requested page, so `current_page <= total_pages`
/// only holds for in-range requests. A page past the end has empty `items`
/// and a `current_page` greater than `total_pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

/// A validated (page, size) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    /// Build a request, clamping page and size to at least 1
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
        }
    }

    /// Zero-based page number sent to the backend
    pub fn wire_page(&self) -> usize {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed for `total_items`, never less than one
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Calculate pagination bounds for a given page
///
/// Returns (start_index, end_index) for slicing the items array. Pages past
/// the end yield an empty range instead of an error.
pub fn page_bounds(total_items: usize, page: usize, limit: usize) -> (usize, usize) {
    let start = page
        .saturating_sub(1)
        .saturating_mul(limit)
        .min(total_items);
    let end = start.saturating_add(limit).min(total_items);
    (start, end)
}

/// Paginate an in-memory sequence
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> PaginatedResponse<T> {
    let total_items = items.len();
    let (start, end) = page_bounds(total_items, request.page, request.size);

    let page_items = items.into_iter().skip(start).take(end - start).collect();

    PaginatedResponse {
        items: page_items,
        current_page: request.page,
        total_pages: total_pages(total_items, request.size),
        total_items,
        items_per_page: request.size,
    }
}

// ============================================================================
// Backend envelopes
// ============================================================================

/// Shapes a list endpoint may answer with
///
/// Newer endpoints return a Spring `Page` object; older ones return a bare
/// array. An object without `content`, or with `content: null`, is read as
/// an empty page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageEnvelope {
    List(Vec<Value>),
    Page {
        #[serde(default, deserialize_with = "null_as_empty")]
        content: Vec<Value>,
        #[serde(default, rename = "totalElements")]
        total_elements: Option<usize>,
        #[serde(default, rename = "totalPages")]
        total_pages: Option<usize>,
    },
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PageEnvelope {
    /// Interpret a decoded response body
    pub fn from_value(body: Value) -> Result<Self, NormalizeError> {
        serde_json::from_value(body).map_err(|e| {
            NormalizeError::MalformedRecord(format!("unexpected list response shape: {e}"))
        })
    }

    /// Raw records, whatever the envelope
    pub fn into_records(self) -> Vec<Value> {
        match self {
            PageEnvelope::List(records) => records,
            PageEnvelope::Page { content, .. } => content,
        }
    }
}

/// Build a page of posts from a backend envelope
///
/// When the backend sends `totalElements`, `content` is already the requested
/// page: totals are taken from the backend and records beyond `request.size`
/// are dropped. Without it the records are the whole result set, so the
/// requested page is sliced out locally and the totals derived from it.
pub fn build_post_page(
    envelope: PageEnvelope,
    request: PageRequest,
    now: DateTime<Utc>,
) -> Result<PaginatedResponse<Post>, NormalizeError> {
    let (records, backend_total_items, backend_total_pages) = match envelope {
        PageEnvelope::List(records) => (records, None, None),
        PageEnvelope::Page {
            content,
            total_elements,
            total_pages,
        } => (content, total_elements, total_pages),
    };

    let (total_items, start, end) = match backend_total_items {
        Some(total_items) => (total_items, 0, records.len().min(request.size)),
        None => {
            let (start, end) = page_bounds(records.len(), request.page, request.size);
            (records.len(), start, end)
        }
    };

    let items = records[start..end]
        .iter()
        .map(|raw| normalize_post(raw, now))
        .collect::<Result<Vec<_>, _>>()?;

    let total_pages = backend_total_pages
        .filter(|pages| *pages >= 1)
        .unwrap_or_else(|| total_pages(total_items, request.size));

    Ok(PaginatedResponse {
        items,
        current_page: request.page,
        total_pages,
        total_items,
        items_per_page: request.size,
    })
}
