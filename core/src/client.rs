//! Stateless HTTP request builder and response parser for the content API.
//!
//! # Design
//! `BlogClient` holds only the base URL and the placeholder image and carries
//! no mutable state between calls. Each read operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Whoever executes the round-trip sits in
//! between, which keeps this layer deterministic and free of I/O.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, DEFAULT_PLACEHOLDER_IMAGE};
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Category, Post, PostFilter};

/// Characters escaped in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the content API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    placeholder_image: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
            ..Self::new(&config.base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self, filter: &PostFilter) -> HttpRequest {
        let mut req = HttpRequest::get(format!("{}/api/posts/", self.base_url));
        req.query = filter.query_pairs();
        req
    }

    /// The slug may come straight from a browser URL, so it is escaped as a
    /// single path segment.
    pub fn build_get_post(&self, slug: &str) -> HttpRequest {
        let slug = utf8_percent_encode(slug, PATH_SEGMENT);
        HttpRequest::get(format!("{}/api/posts/{slug}/", self.base_url))
    }

    pub fn build_list_categories(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/api/categories/", self.base_url))
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> ApiResult<Vec<Post>> {
        parse_json(response)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> ApiResult<Post> {
        parse_json(response)
    }

    pub fn parse_list_categories(&self, response: HttpResponse) -> ApiResult<Vec<Category>> {
        parse_json(response)
    }

    /// Turn a post's `image` field into a displayable URL.
    ///
    /// Empty or absent paths map to the placeholder. Absolute references
    /// (any URI scheme, or protocol-relative `//host/...`) are returned
    /// unchanged; anything else is treated as a path on the API host.
    pub fn resolve_image_url(&self, path: Option<&str>) -> String {
        let path = match path {
            Some(p) if !p.is_empty() => p,
            _ => return self.placeholder_image.clone(),
        };
        if is_absolute_reference(path) {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

/// `scheme:` per RFC 3986 (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`), or `//`.
fn is_absolute_reference(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = path.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    check_status(&response)?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BlogClient {
        BlogClient::new("http://localhost:9000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_posts_without_filter() {
        let req = client().build_list_posts(&PostFilter::default());
        assert_eq!(req.url, "http://localhost:9000/api/posts/");
        assert!(req.query.is_empty());
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_list_posts_forwards_search_verbatim() {
        let req = client().build_list_posts(&PostFilter::search("next js & rust"));
        assert_eq!(
            req.query,
            vec![("search".to_string(), "next js & rust".to_string())]
        );
    }

    #[test]
    fn build_list_posts_with_both_filters() {
        let filter = PostFilter {
            category: Some("tech".to_string()),
            search: Some("async".to_string()),
        };
        let req = client().build_list_posts(&filter);
        assert_eq!(
            req.query,
            vec![
                ("category".to_string(), "tech".to_string()),
                ("search".to_string(), "async".to_string()),
            ]
        );
    }

    #[test]
    fn build_get_post_keeps_trailing_slash() {
        let req = client().build_get_post("hello-world");
        assert_eq!(req.url, "http://localhost:9000/api/posts/hello-world/");
        assert!(req.query.is_empty());
    }

    #[test]
    fn build_list_categories_produces_correct_request() {
        let req = client().build_list_categories();
        assert_eq!(req.url, "http://localhost:9000/api/categories/");
    }

    #[test]
    fn build_get_post_escapes_slug() {
        let req = client().build_get_post("a b?x#y/z");
        assert_eq!(req.url, "http://localhost:9000/api/posts/a%20b%3Fx%23y%2Fz/");
        let req = client().build_get_post("café");
        assert_eq!(req.url, "http://localhost:9000/api/posts/caf%C3%A9/");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BlogClient::new("http://localhost:9000/");
        let req = client.build_list_categories();
        assert_eq!(req.url, "http://localhost:9000/api/categories/");
    }

    #[test]
    fn parse_list_posts_empty_is_not_an_error() {
        let posts = client().parse_list_posts(ok("[]")).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn parse_get_post_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"detail":"No Post matches the given query."}"#.to_string(),
        };
        let err = client().parse_get_post(response).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_list_categories_server_error() {
        let response = HttpResponse {
            status: 502,
            headers: Vec::new(),
            body: "bad gateway".to_string(),
        };
        let err = client().parse_list_categories(response).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(ok("<html>oops</html>")).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn parse_get_post_wrong_shape_is_malformed() {
        let err = client().parse_get_post(ok("[]")).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn parse_list_categories_preserves_fields() {
        let body = r#"[{"id":3,"name":"Tech & Code","slug":"tech"},{"id":9,"name":"Life","slug":"life"}]"#;
        let categories = client().parse_list_categories(ok(body)).unwrap();
        assert_eq!(
            categories,
            vec![
                Category { id: 3, name: "Tech & Code".to_string(), slug: "tech".to_string() },
                Category { id: 9, name: "Life".to_string(), slug: "life".to_string() },
            ]
        );
    }

    #[test]
    fn resolve_image_url_placeholder() {
        assert_eq!(client().resolve_image_url(None), "/placeholder.jpg");
        assert_eq!(client().resolve_image_url(Some("")), "/placeholder.jpg");
    }

    #[test]
    fn resolve_image_url_absolute_passes_through() {
        assert_eq!(
            client().resolve_image_url(Some("http://x/y.png")),
            "http://x/y.png"
        );
        assert_eq!(
            client().resolve_image_url(Some("https://cdn.example.com/a.jpg")),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn resolve_image_url_any_scheme_or_protocol_relative() {
        for url in [
            "HTTPS://cdn.example.com/a.png",
            "//cdn.example.com/a.png",
            "data:image/png;base64,AAAA",
            "ftp+x.y-z://host/a.png",
        ] {
            assert_eq!(client().resolve_image_url(Some(url)), url);
        }
    }

    #[test]
    fn resolve_image_url_colon_after_slash_is_relative() {
        assert_eq!(
            client().resolve_image_url(Some("media/12:30.png")),
            "http://localhost:9000/media/12:30.png"
        );
        assert_eq!(
            client().resolve_image_url(Some("1x:thumb.png")),
            "http://localhost:9000/1x:thumb.png"
        );
    }

    #[test]
    fn resolve_image_url_relative_is_prefixed() {
        assert_eq!(
            client().resolve_image_url(Some("/media/a.png")),
            "http://localhost:9000/media/a.png"
        );
        assert_eq!(
            client().resolve_image_url(Some("media/a.png")),
            "http://localhost:9000/media/a.png"
        );
    }

    #[test]
    fn from_config_uses_configured_placeholder() {
        let config = ApiConfig {
            placeholder_image: "/img/none.svg".to_string(),
            ..ApiConfig::new("https://blog.example.com/")
        };
        let client = BlogClient::from_config(&config);
        assert_eq!(client.base_url(), "https://blog.example.com");
        assert_eq!(client.resolve_image_url(None), "/img/none.svg");
    }
}
