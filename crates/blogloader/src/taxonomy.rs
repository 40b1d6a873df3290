//! Category and tag loaders

use blogloader_core::endpoints;
use blogloader_core::mock::{mock_categories, mock_popular_tags, mock_tags};
use blogloader_core::taxonomy::{parse_categories, parse_tags, Category, Tag};

use crate::client::BlogClient;
use crate::error::Result;

/// Tags returned by [`BlogClient::popular_tags`] when the caller does not say
pub const DEFAULT_POPULAR_TAGS: usize = 10;

impl BlogClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let request = endpoints::categories();
        self.load(&request, &request.path, parse_categories, || {
            Some(mock_categories())
        })
        .await
    }

    /// Categories including the number of published posts in each
    pub async fn list_categories_with_post_count(&self) -> Result<Vec<Category>> {
        let request = endpoints::categories_with_post_count();
        self.load(&request, &request.path, parse_categories, || {
            Some(mock_categories())
        })
        .await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let request = endpoints::tags();
        self.load(&request, &request.path, parse_tags, || Some(mock_tags()))
            .await
    }

    /// The `limit` most used tags
    pub async fn popular_tags(&self, limit: usize) -> Result<Vec<Tag>> {
        let request = endpoints::popular_tags(limit);
        self.load(&request, &request.path, parse_tags, || {
            Some(mock_popular_tags(limit))
        })
        .await
    }
}
