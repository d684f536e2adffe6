//! Ureq-based HTTP backend (blocking).
//!
//! ureq is synchronous, so [`HttpClient::send`] blocks the calling thread
//! for the duration of the round trip. That suits CLI tools and scripts
//! that would rather not carry an async runtime; async applications should
//! prefer the reqwest backend.

use std::io::Read as _;
use std::time::Duration;

use bytes::Bytes;

use crate::error::HttpClientError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};

/// An [`HttpClient`] backed by [`ureq`] (blocking).
#[derive(Debug)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new `UreqClient` with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            // Non-2xx statuses are handled by the client layer, not here.
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl HttpClient for UreqClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = http::Request::builder().method(method).uri(&url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        // ureq types the request body, so the with/without cases split here.
        let result = match body {
            Some(body) => builder
                .body(body.to_vec())
                .map_err(|e| HttpClientError::Other(Box::new(e)))
                .map(|req| self.agent.run(req))?,
            None => builder
                .body(())
                .map_err(|e| HttpClientError::Other(Box::new(e)))
                .map(|req| self.agent.run(req))?,
        };

        match result {
            Ok(response) => read_response(response),
            Err(ureq::Error::Timeout(_)) => Err(HttpClientError::Timeout),
            Err(ureq::Error::HostNotFound) => {
                Err(HttpClientError::Connection("host not found".to_owned()))
            }
            Err(ureq::Error::Io(e)) => Err(HttpClientError::Connection(e.to_string())),
            Err(e) => Err(HttpClientError::Other(Box::new(e))),
        }
    }
}

/// Drain a ureq response into an [`HttpResponse`].
fn read_response(response: http::Response<ureq::Body>) -> Result<HttpResponse, HttpClientError> {
    let (parts, body) = response.into_parts();

    let mut bytes = Vec::new();
    body.into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| HttpClientError::Connection(e.to_string()))?;

    Ok(HttpResponse {
        status: parts.status,
        headers: parts.headers,
        body: Bytes::from(bytes),
    })
}
