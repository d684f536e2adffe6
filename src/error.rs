//! Error types for the Skiff SDK.

use thiserror::Error;

/// Errors surfaced by SDK operations.
#[derive(Debug, Error)]
pub enum SkiffError {
    /// Malformed caller input, detected before any network I/O.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Transport-level failure (DNS, TCP, TLS).
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request timed out or was cancelled mid-flight.
    ///
    /// Never retried: retries only apply to transient failures within a
    /// still-active call lifecycle.
    #[error("request timed out or was cancelled")]
    Cancelled,

    /// Non-2xx HTTP response with the parsed server error body.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code from the response body, if present.
        code: Option<String>,
        /// Human-readable message.
        message: String,
    },

    /// An `If-Match` precondition failed (HTTP 409 or 412).
    ///
    /// The caller must re-fetch the current resource state and retry the
    /// whole operation with the fresh entity tag.
    #[error("precondition failed ({status}): {message}")]
    Conflict {
        /// HTTP status code (409 or 412).
        status: u16,
        /// Machine-readable error code from the response body, if present.
        code: Option<String>,
        /// Human-readable message.
        message: String,
    },

    /// A response body was present but did not match the expected shape.
    #[error("failed to decode response at `{path}`: {source}")]
    Decode {
        /// Dotted path to the offending field.
        path: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}

impl SkiffError {
    /// Decode `bytes` as JSON into `T`, reporting the field path on failure.
    pub(crate) fn decode_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, Self> {
        let mut de = serde_json::Deserializer::from_slice(bytes);
        serde_path_to_error::deserialize(&mut de).map_err(|e| {
            let path = e.path().to_string();
            SkiffError::Decode {
                path,
                source: e.into_inner(),
            }
        })
    }

    /// Decode an already-parsed JSON value into `T`, reporting the field path.
    pub(crate) fn decode_value<T: serde::de::DeserializeOwned>(
        value: serde_json::Value,
    ) -> Result<T, Self> {
        serde_path_to_error::deserialize(value).map_err(|e| {
            let path = e.path().to_string();
            SkiffError::Decode {
                path,
                source: e.into_inner(),
            }
        })
    }
}

/// Errors produced by [`HttpClient`](crate::HttpClient) backends.
///
/// The client maps these into [`SkiffError`] before they reach callers.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The request exceeded its deadline or was cancelled.
    #[error("request timed out")]
    Timeout,

    /// Connection-level failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other backend error.
    #[error("http client error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}
