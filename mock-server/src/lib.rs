use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub category: Option<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Immutable content served by the mock API.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
}

impl ContentStore {
    /// Posts newest first, filtered the way the content service filters:
    /// `category` matches the nested category slug, `search` is a
    /// case-insensitive substring match on title or content.
    pub fn query_posts(&self, query: &PostQuery) -> Vec<Post> {
        let needle = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| match &query.category {
                Some(slug) => p.category.as_ref().is_some_and(|c| &c.slug == slug),
                None => true,
            })
            .filter(|p| match &needle {
                Some(n) => p.title.to_lowercase().contains(n) || p.content.to_lowercase().contains(n),
                None => true,
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// A small fixed blog: three categories, five posts, one uncategorised.
    pub fn seeded() -> Self {
        let tech = category(1, "Technology", "tech");
        let travel = category(2, "Travel", "travel");
        let life = category(3, "Lifestyle", "life");

        let posts = vec![
            post(
                1,
                "Getting started with Next.js",
                "getting-started-with-nextjs",
                Some("/media/blog_images/nextjs.png"),
                "<p>Next.js makes server rendering approachable.</p>",
                (2025, 1, 10),
                Some(&tech),
            ),
            post(
                2,
                "Ownership in Rust",
                "ownership-in-rust",
                Some("https://images.unsplash.com/photo-rust.jpg"),
                "<p>Every value has a single owner. Borrowing is next.</p>",
                (2025, 2, 3),
                Some(&tech),
            ),
            post(
                3,
                "A week in Lisbon",
                "a-week-in-lisbon",
                Some(""),
                "<p>Trams, tiles and pastel de nata.</p>",
                (2025, 1, 22),
                Some(&travel),
            ),
            post(
                4,
                "Slow mornings",
                "slow-mornings",
                None,
                "<p>Coffee first, email later.</p>",
                (2024, 12, 1),
                Some(&life),
            ),
            post(
                5,
                "Hello world",
                "hello-world",
                None,
                "<p>The first post on this blog.</p>",
                (2024, 11, 15),
                None,
            ),
        ];

        Self {
            categories: vec![tech, travel, life],
            posts,
        }
    }
}

fn category(id: i64, name: &str, slug: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

fn post(
    id: i64,
    title: &str,
    slug: &str,
    image: Option<&str>,
    content: &str,
    (y, m, d): (i32, u32, u32),
    category: Option<&Category>,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        image: image.map(str::to_string),
        excerpt: Some(format!("{title}: a short introduction.")),
        content: content.to_string(),
        created_at: Utc
            .with_ymd_and_hms(y, m, d, 9, 0, 0)
            .single()
            .expect("seed dates are valid calendar dates"),
        category: category.cloned(),
    }
}

pub type Db = Arc<ContentStore>;

pub fn app() -> Router {
    app_with(ContentStore::seeded())
}

pub fn app_with(store: ContentStore) -> Router {
    let db: Db = Arc::new(store);
    Router::new()
        .route("/api/posts/", get(list_posts))
        .route("/api/posts/{slug}/", get(get_post))
        .route("/api/categories/", get(list_categories))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, store: ContentStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_posts(State(db): State<Db>, Query(query): Query<PostQuery>) -> Json<Vec<Post>> {
    tracing::debug!(?query, "list posts");
    Json(db.query_posts(&query))
}

async fn get_post(State(db): State<Db>, Path(slug): Path<String>) -> Result<Json<Post>, StatusCode> {
    db.post(&slug).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<Category>> {
    Json(db.categories.clone())
}
