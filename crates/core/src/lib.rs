//! Core library for blogloader
//!
//! This crate implements the **Functional Core** of blogloader, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`blogloader_core`** (this crate): Pure transformation functions with zero I/O
//! - **`blogloader`**: HTTP calls, configuration and the CLI (the Imperative Shell)
//!
//! Every function here is deterministic given its arguments. Where the wall
//! clock matters (a post without a date) the caller passes `now` in.
//!
//! # Module Organization
//!
//! - [`post`]: the `Post` view model and the field-precedence normalizer
//! - [`pagination`]: page arithmetic and backend page envelopes
//! - [`endpoints`]: which backend endpoint serves which operation
//! - [`policy`]: how failed calls are reported (typed failure or mock fallback)
//! - [`mock`]: deterministic development data
//! - [`taxonomy`]: category and tag view models
//!
//! # Example Usage
//!
//! ```rust
//! use blogloader_core::pagination::{build_post_page, PageEnvelope, PageRequest};
//!
//! let body = serde_json::json!({
//!     "content": [{ "id": 5, "title": "Hello" }],
//!     "totalElements": 1
//! });
//!
//! let envelope = PageEnvelope::from_value(body).unwrap();
//! let page = build_post_page(envelope, PageRequest::new(1, 10), chrono::Utc::now()).unwrap();
//!
//! assert_eq!(page.items[0].slug, "5");
//! assert_eq!(page.total_pages, 1);
//! ```

pub mod endpoints;
pub mod mock;
pub mod pagination;
pub mod policy;
pub mod post;
pub mod taxonomy;
