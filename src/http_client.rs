//! HTTP transport abstraction for pluggable backends.

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::future::Future;

use crate::error::HttpClientError;

/// A fully-resolved HTTP request, ready for a backend to send.
///
/// Produced by [`RequestSpec::build`](crate::RequestSpec::build) after path
/// templating, query encoding and header layering have already happened; a
/// backend only has to put it on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb for the request.
    pub method: Method,
    /// The absolute URL, query string included.
    pub url: String,
    /// All headers to send: caller, default and auth layers merged.
    pub headers: HeaderMap,
    /// Serialized body, if the operation carries one.
    pub body: Option<Bytes>,
}

/// A raw HTTP response as returned by a backend.
#[derive(Debug)]
pub struct HttpResponse {
    /// Status line of the response.
    pub status: StatusCode,
    /// Headers as received.
    pub headers: HeaderMap,
    /// Body bytes, possibly empty.
    pub body: Bytes,
}

/// Trait for pluggable HTTP backends.
///
/// Uses native `impl Future` in traits, so no `async-trait` macro is
/// required.
///
/// A backend sends exactly one request per call and performs no retries of
/// its own; retry policy lives in the client above it.
pub trait HttpClient: Send + Sync {
    /// Send a request and return the raw response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpClientError>> + Send;
}
