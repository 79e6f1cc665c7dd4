//! Read-only client for a blog's content API.
//!
//! # Overview
//! Fetches posts and categories from `/api/posts/`, `/api/posts/:slug/` and
//! `/api/categories/`, returning typed snapshots, and derives the small bits
//! of page state the blog front end needs.
//!
//! # Design
//! - `BlogClient` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - A `Transport` executes requests; `UreqTransport` is the blocking default.
//! - `ContentClient` ties the two together, one request per call, with no
//!   caching and no retries.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use client::BlogClient;
pub use config::ApiConfig;
pub use content::ContentClient;
pub use error::{ApiError, ApiResult};
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Category, Post, PostFilter};
pub use view::{
    reading_time_minutes, related, CategoryIndex, DetailView, ListingView, SearchView,
    RELATED_POSTS_LIMIT,
};
