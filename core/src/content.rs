//! Round-trip facade over `BlogClient` and a `Transport`.
//!
//! Each call is one build, one execute, one parse. Nothing is cached or
//! retried, and no state is shared between calls, so a `ContentClient` can be
//! cloned or shared across threads freely.

use tracing::{debug, warn};

use crate::client::BlogClient;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Category, Post, PostFilter};
use crate::view::related;

#[derive(Debug, Clone)]
pub struct ContentClient<T: Transport = UreqTransport> {
    client: BlogClient,
    transport: T,
}

impl ContentClient<UreqTransport> {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_transport(BlogClient::from_config(config), UreqTransport::new(config.timeout))
    }

    /// Client configured from `BLOG_API_URL` / `BLOG_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env())
    }
}

impl<T: Transport> ContentClient<T> {
    pub fn with_transport(client: BlogClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &BlogClient {
        &self.client
    }

    /// Posts in server order. The client applies no filtering of its own.
    pub fn list_posts(&self, filter: &PostFilter) -> ApiResult<Vec<Post>> {
        let req = self.client.build_list_posts(filter);
        debug!(url = %req.url, query = ?req.query, "listing posts");
        let result = self
            .transport
            .execute(&req)
            .and_then(|resp| self.client.parse_list_posts(resp));
        log_failure("list_posts", &result);
        result
    }

    pub fn get_post(&self, slug: &str) -> ApiResult<Post> {
        let req = self.client.build_get_post(slug);
        debug!(url = %req.url, "fetching post");
        let result = self
            .transport
            .execute(&req)
            .and_then(|resp| self.client.parse_get_post(resp));
        log_failure("get_post", &result);
        result
    }

    pub fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let req = self.client.build_list_categories();
        debug!(url = %req.url, "listing categories");
        let result = self
            .transport
            .execute(&req)
            .and_then(|resp| self.client.parse_list_categories(resp));
        log_failure("list_categories", &result);
        result
    }

    pub fn resolve_image_url(&self, path: Option<&str>) -> String {
        self.client.resolve_image_url(path)
    }

    /// Up to `limit` other posts from the same category as `post`.
    ///
    /// Uncategorised posts have no related posts and cost no request.
    pub fn related_posts(&self, post: &Post, limit: usize) -> ApiResult<Vec<Post>> {
        let Some(slug) = post.category_slug() else {
            return Ok(Vec::new());
        };
        let posts = self.list_posts(&PostFilter::category(slug))?;
        Ok(related(posts, &post.slug, limit))
    }
}

fn log_failure<V>(operation: &str, result: &ApiResult<V>) {
    match result {
        Err(ApiError::NotFound) => debug!(operation, "resource not found"),
        Err(err) => warn!(operation, error = %err, "content request failed"),
        Ok(_) => {}
    }
}
