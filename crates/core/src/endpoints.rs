//! Request planning: which backend endpoint serves which operation
//!
//! Pure functions only. The shell crate turns an [`ApiRequest`] into an HTTP
//! call against the configured base URL.

use crate::pagination::PageRequest;

/// Selection applied to a paginated post listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostFilter {
    #[default]
    All,
    /// Free-text search over title and content
    Search(String),
    /// Category slug
    Category(String),
    /// Tag slug
    Tag(String),
}

impl PostFilter {
    /// Short label used in log lines and resource names
    pub fn describe(&self) -> String {
        match self {
            PostFilter::All => "all posts".to_string(),
            PostFilter::Search(query) => format!("search \"{query}\""),
            PostFilter::Category(slug) => format!("category \"{slug}\""),
            PostFilter::Tag(slug) => format!("tag \"{slug}\""),
        }
    }
}

/// A planned GET request relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Path starting with `/`, segments already percent-encoded
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Absolute URL (without query string) under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `GET /posts`, every published post
pub fn all_posts() -> ApiRequest {
    ApiRequest::get("/posts")
}

/// One page of posts for a filter, with the page converted to the 0-based wire form
pub fn post_page(filter: &PostFilter, request: PageRequest) -> ApiRequest {
    let base = match filter {
        PostFilter::All => ApiRequest::get("/posts"),
        PostFilter::Search(query) => ApiRequest::get("/posts/search").with_query("query", query),
        PostFilter::Category(slug) => {
            ApiRequest::get(format!("/posts/by-category/{}", segment(slug)))
        }
        PostFilter::Tag(slug) => ApiRequest::get(format!("/posts/by-tag/{}", segment(slug))),
    };

    base.with_query("page", request.wire_page())
        .with_query("size", request.size)
}

/// `GET /posts/by-slug/{slug}`
pub fn post_by_slug(slug: &str) -> ApiRequest {
    ApiRequest::get(format!("/posts/by-slug/{}", segment(slug)))
}

/// `GET /categories`
pub fn categories() -> ApiRequest {
    ApiRequest::get("/categories")
}

/// `GET /categories/with-post-count`
pub fn categories_with_post_count() -> ApiRequest {
    ApiRequest::get("/categories/with-post-count")
}

/// `GET /tags`
pub fn tags() -> ApiRequest {
    ApiRequest::get("/tags")
}

/// `GET /tags/popular?limit={limit}`
pub fn popular_tags(limit: usize) -> ApiRequest {
    ApiRequest::get("/tags/popular").with_query("limit", limit)
}
