//! Page-level states derived from content results.
//!
//! Every blog page does the same thing with a fetch result: show a grid,
//! show an empty state, or show that the content service is unavailable.
//! These types make that decision once so the rendering layer only matches.

use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};
use crate::types::{Category, Post};

pub const WORDS_PER_MINUTE: usize = 200;
pub const RELATED_POSTS_LIMIT: usize = 3;

/// Estimated reading time, rounded up, never below one minute.
pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Posts other than `slug`, keeping server order, at most `limit` of them.
pub fn related(posts: Vec<Post>, slug: &str, limit: usize) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|p| p.slug != slug)
        .take(limit)
        .collect()
}

#[derive(Debug)]
pub enum ListingView {
    Posts(Vec<Post>),
    /// The request succeeded but matched nothing.
    Empty,
    Unavailable(ApiError),
}

impl ListingView {
    pub fn from_result(result: ApiResult<Vec<Post>>) -> Self {
        match result {
            Ok(posts) if posts.is_empty() => ListingView::Empty,
            Ok(posts) => ListingView::Posts(posts),
            Err(err) => ListingView::Unavailable(err),
        }
    }

    /// Posts to render; empty for both the empty and the failed state.
    pub fn posts(&self) -> &[Post] {
        match self {
            ListingView::Posts(posts) => posts,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posts().is_empty()
    }
}

/// Result of a search, remembering the term for the "no results for ..." line.
#[derive(Debug)]
pub struct SearchView {
    pub term: String,
    pub listing: ListingView,
}

impl SearchView {
    pub fn new(term: impl Into<String>, result: ApiResult<Vec<Post>>) -> Self {
        Self {
            term: term.into(),
            listing: ListingView::from_result(result),
        }
    }
}

#[derive(Debug)]
pub enum DetailView {
    Found {
        post: Box<Post>,
        related: Vec<Post>,
        reading_time: usize,
    },
    NotFound,
    Unavailable(ApiError),
}

impl DetailView {
    /// Build the detail state. A failed related-posts lookup only empties the
    /// related section; the post itself still renders.
    pub fn from_results(
        post: ApiResult<Post>,
        related: ApiResult<Vec<Post>>,
    ) -> Self {
        match post {
            Ok(post) => {
                let reading_time = reading_time_minutes(&post.content);
                DetailView::Found {
                    post: Box::new(post),
                    related: related.unwrap_or_default(),
                    reading_time,
                }
            }
            Err(ApiError::NotFound) => DetailView::NotFound,
            Err(err) => DetailView::Unavailable(err),
        }
    }
}

/// Categories keyed by slug, for the category pages and navigation menu.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    ordered: Vec<Category>,
    by_slug: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn new(categories: Vec<Category>) -> Self {
        let by_slug = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.slug.clone(), i))
            .collect();
        Self {
            ordered: categories,
            by_slug,
        }
    }

    pub fn lookup(&self, slug: &str) -> Option<&Category> {
        self.by_slug.get(slug).map(|&i| &self.ordered[i])
    }

    /// Heading for a category page; falls back to the slug itself when the
    /// category list has not loaded or does not know it.
    pub fn display_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.lookup(slug).map(|c| c.name.as_str()).unwrap_or(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
