//! Blog data loaders
//!
//! The **Imperative Shell** over [`blogloader_core`]: every operation performs
//! exactly one HTTP call against the blog REST API, then hands the body to a
//! pure transformation from the core crate.
//!
//! Failures are typed ([`Error`]). A 404 is replaced by deterministic mock
//! data only when the client is configured with
//! [`Environment::Development`]; everything else reaches the caller.
//!
//! ```rust,no_run
//! use blogloader::{BlogClient, BlogConfig, Environment};
//!
//! # async fn demo() -> blogloader::Result<()> {
//! let client = BlogClient::new(BlogConfig::new("http://localhost/api", Environment::Production))?;
//! let page = client.paginated_posts(1, 10).await?;
//! println!("{} of {} pages", page.current_page, page.total_pages);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod posts;
mod taxonomy;

#[cfg(test)]
mod test_support;

pub use client::BlogClient;
pub use config::{BlogConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use posts::DEFAULT_FEATURED_COUNT;
pub use taxonomy::DEFAULT_POPULAR_TAGS;

// Re-export domain types from core
pub use blogloader_core::endpoints::PostFilter;
pub use blogloader_core::pagination::{PaginatedResponse, DEFAULT_PAGE_SIZE};
pub use blogloader_core::policy::Environment;
pub use blogloader_core::post::{Post, PostId};
pub use blogloader_core::taxonomy::{Category, Tag};
