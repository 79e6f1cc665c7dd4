//! Domain DTOs for the blog content API.
//!
//! # Design
//! These types mirror the content service's JSON but are defined
//! independently from the mock-server crate. Integration tests catch any
//! schema drift between the two. Unknown fields in the payload are ignored,
//! so server-side additions do not break older clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post category. `slug` uniquely resolves one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A single blog post as returned by the API.
///
/// `image` may be an absolute URL, a path relative to the API host
/// (usually under `/media/`), empty, or null. Use
/// [`BlogClient::resolve_image_url`](crate::BlogClient::resolve_image_url)
/// to turn it into something displayable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Post {
    /// Slug of the post's category, if it has one.
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.slug.as_str())
    }
}

/// Query for the post listing. Both filters are optional and combinable;
/// empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PostFilter {
    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: Some(slug.into()),
            search: None,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(term.into()),
        }
    }

    /// Query pairs in the order they are sent: `category` then `search`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("category".to_string(), category.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        pairs
    }
}
