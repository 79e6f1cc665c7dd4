//! Executing `HttpRequest` values against the network.
//!
//! # Design
//! The `Transport` trait is the only seam between the sans-IO client and real
//! I/O. Transports return every HTTP status as data; only failures to
//! complete the exchange become `ApiError::Network`. A body that arrived in
//! full but is not UTF-8, or is larger than the read limit, is
//! `ApiError::Malformed`. Status interpretation stays in `BlogClient::parse_*`.

use std::time::Duration;

use crate::config::DEFAULT_TIMEOUT;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> ApiResult<HttpResponse>;
}

/// Blocking transport backed by a shared `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = self.agent.get(&request.url);
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let bytes = response.body_mut().read_to_vec().map_err(|e| match e {
            ureq::Error::BodyExceedsLimit(limit) => {
                ApiError::Malformed(format!("response body exceeds {limit} bytes"))
            }
            other => ApiError::Network(other.to_string()),
        })?;
        let body = String::from_utf8(bytes)
            .map_err(|e| ApiError::Malformed(format!("response body is not UTF-8: {e}")))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
