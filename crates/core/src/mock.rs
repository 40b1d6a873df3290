//! Deterministic mock data for development
//!
//! Substituted when a backend endpoint answers 404 and the caller runs in
//! [`Environment::Development`](crate::policy::Environment). Everything here is
//! a pure function of its arguments: dates count back from a fixed anchor
//! rather than from the wall clock.

use chrono::{DateTime, Duration, Utc};

use crate::pagination::{paginate, PageRequest, PaginatedResponse};
use crate::post::{format_timestamp, placeholder_image_url, Post, PostId};
use crate::taxonomy::{Category, Tag};

/// Number of posts in the mock feed
pub const MOCK_POST_COUNT: usize = 30;

pub const MOCK_AUTHOR: &str = "Mock Author";

/// 2024-01-01T00:00:00Z, the date of mock post #1
const MOCK_ANCHOR_TIMESTAMP: i64 = 1_704_067_200;

fn mock_date(index: usize) -> String {
    let anchor = DateTime::<Utc>::from_timestamp(MOCK_ANCHOR_TIMESTAMP, 0).unwrap_or_default();
    format_timestamp(anchor - Duration::days(index as i64))
}

/// HTML body of a mock post
pub fn mock_content(seed: impl std::fmt::Display) -> String {
    format!(
        "<p>This is the full content of \"Blog Post {seed}\". It is mock data shown because \
         the blog API is not available.</p>\n\
         <h2>Introduction</h2>\n\
         <p>Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam euismod, nisl eget \
         ultricies ultrices, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl.</p>\n\
         <h2>Main Section</h2>\n\
         <p>Praesent eget sem vel leo ultrices bibendum. Aenean faucibus. Morbi dolor nulla, \
         malesuada eu, pulvinar at, mollis ac, nulla. Curabitur auctor semper nulla.</p>\n\
         <h2>Conclusion</h2>\n\
         <p>Duis bibendum, felis sed interdum venenatis, turpis enim blandit mi, in porttitor \
         pede justo eu massa. Donec dapibus.</p>\n"
    )
}

/// Generate `count` mock posts numbered from 1
pub fn generate_mock_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|index| {
            let number = index + 1;
            let parity = if index % 2 == 0 { "even" } else { "odd" };

            Post {
                id: PostId::from(number as u64),
                title: format!("Blog Post {number}"),
                slug: format!("blog-post-{number}"),
                description: format!(
                    "This is a description for blog post {number}. This is mock data shown \
                     because the API request failed."
                ),
                content: mock_content(number),
                image_url: placeholder_image_url(format!("blog{number}")),
                date: mock_date(index),
                author: MOCK_AUTHOR.to_string(),
                tags: vec!["mock".to_string(), "sample".to_string(), parity.to_string()],
            }
        })
        .collect()
}

/// The standard mock feed
pub fn mock_posts() -> Vec<Post> {
    generate_mock_posts(MOCK_POST_COUNT)
}

/// One page of the mock feed
pub fn mock_post_page(request: PageRequest) -> PaginatedResponse<Post> {
    paginate(mock_posts(), request)
}

/// Look a slug up in the mock feed
pub fn find_mock_post(slug: &str) -> Option<Post> {
    mock_posts().into_iter().find(|post| post.slug == slug)
}

pub fn mock_categories() -> Vec<Category> {
    [
        (1, "Technology", "technology", 12),
        (2, "Development", "development", 8),
        (3, "Design", "design", 5),
        (4, "Business", "business", 3),
        (5, "Marketing", "marketing", 4),
        (6, "Tutorials", "tutorials", 7),
    ]
    .into_iter()
    .map(|(id, name, slug, post_count)| Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        color: None,
        post_count: Some(post_count),
    })
    .collect()
}

pub fn mock_tags() -> Vec<Tag> {
    [
        (1, "Svelte", "svelte", 3),
        (2, "JavaScript", "javascript", 5),
        (3, "TypeScript", "typescript", 2),
        (4, "Web", "web", 6),
        (5, "Development", "development", 4),
        (6, "DaisyUI", "daisyui", 2),
        (7, "Tailwind", "tailwind", 3),
        (8, "CSS", "css", 4),
        (9, "HTML", "html", 2),
        (10, "API", "api", 1),
        (11, "Design", "design", 3),
    ]
    .into_iter()
    .map(|(id, name, slug, post_count)| Tag {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        post_count: Some(post_count),
    })
    .collect()
}

/// The first `limit` mock tags
pub fn mock_popular_tags(limit: usize) -> Vec<Tag> {
    let mut tags = mock_tags();
    tags.truncate(limit);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_feed_is_deterministic() {
        assert_eq!(mock_posts(), mock_posts());
        assert_eq!(mock_posts().len(), MOCK_POST_COUNT);
    }

    #[test]
    fn test_mock_post_fields() {
        let posts = generate_mock_posts(2);

        assert_eq!(posts[0].id, PostId::from(1));
        assert_eq!(posts[0].title, "Blog Post 1");
        assert_eq!(posts[0].slug, "blog-post-1");
        assert_eq!(
            posts[0].image_url,
            "https://picsum.photos/seed/blog1/800/600"
        );
        assert_eq!(posts[0].author, "Mock Author");
        assert_eq!(posts[0].tags, vec!["mock", "sample", "even"]);
        assert_eq!(posts[1].tags, vec!["mock", "sample", "odd"]);
        assert!(posts[1].content.contains("Blog Post 2"));
    }

    #[test]
    fn test_mock_dates_count_back_one_day() {
        let posts = generate_mock_posts(3);
        assert_eq!(posts[0].date, "2024-01-01T00:00:00.000Z");
        assert_eq!(posts[1].date, "2023-12-31T00:00:00.000Z");
        assert_eq!(posts[2].date, "2023-12-30T00:00:00.000Z");
    }

    #[test]
    fn test_mock_post_page() {
        let page = mock_post_page(PageRequest::new(3, 10));

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].slug, "blog-post-21");
        assert_eq!(page.total_items, 30);
        assert_eq!(page.total_pages, 3);

        let past_end = mock_post_page(PageRequest::new(4, 10));
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_find_mock_post() {
        assert_eq!(find_mock_post("blog-post-7").unwrap().title, "Blog Post 7");
        assert!(find_mock_post("blog-post-31").is_none());
    }

    #[test]
    fn test_mock_taxonomy() {
        assert_eq!(mock_categories().len(), 6);
        assert_eq!(mock_tags().len(), 11);

        let popular = mock_popular_tags(3);
        let names: Vec<&str> = popular.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Svelte", "JavaScript", "TypeScript"]);

        assert_eq!(mock_popular_tags(50).len(), 11);
    }
}
