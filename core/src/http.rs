//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `BlogClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network;
//! a [`Transport`](crate::Transport) executes them. The content API is
//! read-only, so every request is a GET without a body.
//!
//! Query parameters are kept as raw pairs rather than baked into the URL.
//! Percent-encoding is the transport's job, which keeps the terms the
//! caller passed inspectable and verbatim.

/// An HTTP GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub(crate) fn get(url: String) -> Self {
        Self {
            url,
            query: Vec::new(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by a transport after executing an `HttpRequest`, then passed
/// to `BlogClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
