#![allow(dead_code, missing_docs, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

use skiff_dev::{
    ClientBuilder, HttpClient, HttpClientError, HttpRequest, HttpResponse, RetryPolicy,
    SkiffClient,
};

/// A mock backend that replays queued responses and records every request.
///
/// Clones share state, so tests can keep a handle for assertions after the
/// client has taken ownership of its copy.
#[derive(Clone)]
pub struct MockHttpClient {
    state: Arc<MockState>,
}

struct MockState {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpClientError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            state: Arc::new(MockState {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: &str) {
        self.push_response(status, Bytes::from(body.to_owned()));
    }

    /// Queue a bodyless response (delete-style).
    pub fn push_empty(&self, status: u16) {
        self.push_response(status, Bytes::new());
    }

    /// Queue a backend error.
    pub fn push_error(&self, err: HttpClientError) {
        self.state.responses.lock().unwrap().push_back(Err(err));
    }

    fn push_response(&self, status: u16, body: Bytes) {
        let response = HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body,
        };
        self.state.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Number of requests that reached the backend.
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// The `i`-th recorded request.
    pub fn request(&self, i: usize) -> HttpRequest {
        self.state.requests.lock().unwrap()[i].clone()
    }

    /// URLs of all recorded requests, in order.
    pub fn urls(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }
}

impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        self.state.requests.lock().unwrap().push(request);
        self.state
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("mock backend has no queued response"))
    }
}

/// A client over `mock` with retries disabled, for deterministic tests.
pub fn make_client(mock: &MockHttpClient) -> SkiffClient<MockHttpClient> {
    ClientBuilder::new()
        .base_url("https://api.example.test")
        .retry(RetryPolicy::none())
        .build_with(mock.clone())
        .unwrap()
}

/// A retry policy with near-zero backoff so retry tests run instantly.
pub fn fast_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_interval: std::time::Duration::from_millis(1),
        max_interval: std::time::Duration::from_millis(2),
        ..RetryPolicy::default()
    }
}
