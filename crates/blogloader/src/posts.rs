//! Post loaders
//!
//! Each public function here is one backend call. Reshaping is delegated to
//! the pure functions in `blogloader_core`.

use blogloader_core::endpoints::{self, PostFilter};
use blogloader_core::mock::{find_mock_post, mock_post_page, mock_posts};
use blogloader_core::pagination::{build_post_page, PageEnvelope, PageRequest, PaginatedResponse};
use blogloader_core::post::{self, normalize_post, normalize_posts, Post};
use chrono::Utc;

use crate::client::BlogClient;
use crate::error::Result;

/// Number of posts shown as featured when the caller does not say
pub const DEFAULT_FEATURED_COUNT: usize = 3;

impl BlogClient {
    /// Every published post, normalized
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let request = endpoints::all_posts();

        self.load(
            &request,
            &request.path,
            |body| {
                let records = PageEnvelope::from_value(body)?.into_records();
                normalize_posts(&records, Utc::now())
            },
            || Some(mock_posts()),
        )
        .await
    }

    /// One page of posts matching `filter`
    ///
    /// `page` is 1-indexed; page and size below 1 are treated as 1.
    pub async fn posts_page(
        &self,
        filter: &PostFilter,
        page: usize,
        size: usize,
    ) -> Result<PaginatedResponse<Post>> {
        let page_request = PageRequest::new(page, size);
        let request = endpoints::post_page(filter, page_request);

        log::debug!(
            "Loading page {} ({} per page) of {}",
            page_request.page,
            page_request.size,
            filter.describe()
        );

        self.load(
            &request,
            &request.path,
            |body| build_post_page(PageEnvelope::from_value(body)?, page_request, Utc::now()),
            || Some(mock_post_page(page_request)),
        )
        .await
    }

    pub async fn paginated_posts(&self, page: usize, size: usize) -> Result<PaginatedResponse<Post>> {
        self.posts_page(&PostFilter::All, page, size).await
    }

    pub async fn search_posts(
        &self,
        query: &str,
        page: usize,
        size: usize,
    ) -> Result<PaginatedResponse<Post>> {
        self.posts_page(&PostFilter::Search(query.to_string()), page, size)
            .await
    }

    pub async fn posts_by_category(
        &self,
        category_slug: &str,
        page: usize,
        size: usize,
    ) -> Result<PaginatedResponse<Post>> {
        self.posts_page(&PostFilter::Category(category_slug.to_string()), page, size)
            .await
    }

    pub async fn posts_by_tag(
        &self,
        tag_slug: &str,
        page: usize,
        size: usize,
    ) -> Result<PaginatedResponse<Post>> {
        self.posts_page(&PostFilter::Tag(tag_slug.to_string()), page, size)
            .await
    }

    /// A single published post
    ///
    /// A 404 is reported as `NotFound(slug)`; in development the mock feed is
    /// searched for the slug first.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Post> {
        self.load(
            &endpoints::post_by_slug(slug),
            slug,
            |body| normalize_post(&body, Utc::now()),
            || find_mock_post(slug),
        )
        .await
    }

    /// The `count` most recent posts
    pub async fn featured_posts(&self, count: usize) -> Result<Vec<Post>> {
        let posts = self.list_posts().await?;
        Ok(post::featured_posts(posts, count))
    }
}
