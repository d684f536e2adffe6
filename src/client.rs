//! The Skiff API client: configuration, transport pipeline, retries.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use flate2::Compression;
use flate2::write::GzEncoder;
use http::header::{CONTENT_ENCODING, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use http::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{Authenticator, NoAuth};
use crate::error::{HttpClientError, SkiffError};
use crate::http_client::{HttpClient, HttpResponse};
use crate::request::RequestSpec;
use crate::resources::{
    AllowedOutboundResource, AppsResource, BindingsResource, BuildRunsResource, BuildsResource,
    ConfigMapsResource, DomainMappingsResource, JobRunsResource, JobsResource, ProjectsResource,
    SecretsResource,
};
use crate::retry::RetryPolicy;
use crate::{DEFAULT_BASE_URL, SDK_USER_AGENT};

/// Immutable client configuration.
///
/// Assembled by [`ClientBuilder`] before the client exists; never mutated
/// afterwards, so a client can be shared freely across concurrent callers.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all request paths are resolved against.
    pub base_url: String,
    /// Headers applied to every request unless the caller set them.
    pub default_headers: HeaderMap,
    /// Whether outgoing bodies are gzip-compressed.
    pub enable_gzip: bool,
    /// Retry policy for transient failures.
    pub retry: RetryPolicy,
    /// Per-request timeout handed to backend constructors.
    pub timeout: Duration,
}

/// Builder for [`SkiffClient`].
pub struct ClientBuilder {
    base_url: String,
    default_headers: HeaderMap,
    enable_gzip: bool,
    retry: RetryPolicy,
    timeout: Duration,
    auth: Arc<dyn Authenticator>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Start a builder with the production base URL and default policies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            default_headers: HeaderMap::new(),
            enable_gzip: false,
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(60),
            auth: Arc::new(NoAuth),
        }
    }

    /// Override the base URL (e.g. for a regional or staging endpoint).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use the given authenticator for every request.
    #[must_use]
    pub fn authenticator(mut self, auth: impl Authenticator + 'static) -> Self {
        self.auth = Arc::new(auth);
        self
    }

    /// Shorthand for [`BearerAuthenticator`](crate::BearerAuthenticator).
    pub fn bearer_token(self, token: &str) -> Result<Self, SkiffError> {
        let auth = crate::BearerAuthenticator::new(token)?;
        Ok(self.authenticator(auth))
    }

    /// Add a header sent with every request (unless a call overrides it).
    pub fn default_header(mut self, name: HeaderName, value: &str) -> Result<Self, SkiffError> {
        let value = HeaderValue::from_str(value)
            .map_err(|_| SkiffError::Validation(format!("invalid value for header `{name}`")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Gzip-compress outgoing request bodies.
    #[must_use]
    pub fn enable_gzip(mut self, enable: bool) -> Self {
        self.enable_gzip = enable;
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Override the per-request timeout/cancellation deadline.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a client on top of an explicit [`HttpClient`] backend.
    pub fn build_with<C: HttpClient>(mut self, http: C) -> Result<SkiffClient<C>, SkiffError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| SkiffError::Validation(format!("invalid base URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SkiffError::Validation(format!(
                "unsupported base URL scheme `{}`",
                parsed.scheme()
            )));
        }

        self.default_headers
            .entry(USER_AGENT)
            .or_insert_with(|| HeaderValue::from_static(SDK_USER_AGENT));

        let config = ClientConfig {
            base_url: self.base_url,
            default_headers: self.default_headers,
            enable_gzip: self.enable_gzip,
            retry: self.retry,
            timeout: self.timeout,
        };
        Ok(SkiffClient {
            inner: Arc::new(ClientInner {
                http,
                config,
                auth: self.auth,
            }),
        })
    }

    /// Build a client on the default reqwest backend.
    #[cfg(feature = "reqwest-client")]
    pub fn build(self) -> Result<Skiff, SkiffError> {
        let http = crate::backends::ReqwestClient::new(self.timeout);
        self.build_with(http)
    }
}

/// A [`SkiffClient`] over the default reqwest backend.
#[cfg(feature = "reqwest-client")]
pub type Skiff = SkiffClient<crate::backends::ReqwestClient>;

#[cfg(feature = "reqwest-client")]
impl Skiff {
    /// Create a production client from a bearer token.
    pub fn new(token: &str) -> Result<Self, SkiffError> {
        ClientBuilder::new().bearer_token(token)?.build()
    }
}

/// The Skiff API client.
///
/// Cheap to clone; all clones share the same configuration and backend.
pub struct SkiffClient<C: HttpClient> {
    pub(crate) inner: Arc<ClientInner<C>>,
}

impl<C: HttpClient> std::fmt::Debug for SkiffClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkiffClient").finish_non_exhaustive()
    }
}

impl<C: HttpClient> Clone for SkiffClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: HttpClient> SkiffClient<C> {
    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    /// Project operations.
    pub fn projects(&self) -> ProjectsResource<'_, C> {
        ProjectsResource::new(self)
    }

    /// App operations within a project.
    pub fn apps(&self, project_id: impl Into<String>) -> AppsResource<'_, C> {
        AppsResource::new(self, project_id.into())
    }

    /// Job operations within a project.
    pub fn jobs(&self, project_id: impl Into<String>) -> JobsResource<'_, C> {
        JobsResource::new(self, project_id.into())
    }

    /// Job-run operations within a project.
    pub fn job_runs(&self, project_id: impl Into<String>) -> JobRunsResource<'_, C> {
        JobRunsResource::new(self, project_id.into())
    }

    /// Build operations within a project.
    pub fn builds(&self, project_id: impl Into<String>) -> BuildsResource<'_, C> {
        BuildsResource::new(self, project_id.into())
    }

    /// Build-run operations within a project.
    pub fn build_runs(&self, project_id: impl Into<String>) -> BuildRunsResource<'_, C> {
        BuildRunsResource::new(self, project_id.into())
    }

    /// Config-map operations within a project.
    pub fn config_maps(&self, project_id: impl Into<String>) -> ConfigMapsResource<'_, C> {
        ConfigMapsResource::new(self, project_id.into())
    }

    /// Secret operations within a project.
    pub fn secrets(&self, project_id: impl Into<String>) -> SecretsResource<'_, C> {
        SecretsResource::new(self, project_id.into())
    }

    /// Binding operations within a project.
    pub fn bindings(&self, project_id: impl Into<String>) -> BindingsResource<'_, C> {
        BindingsResource::new(self, project_id.into())
    }

    /// Domain-mapping operations within a project.
    pub fn domain_mappings(&self, project_id: impl Into<String>) -> DomainMappingsResource<'_, C> {
        DomainMappingsResource::new(self, project_id.into())
    }

    /// Allowed-outbound-destination operations within a project.
    pub fn allowed_outbound(&self, project_id: impl Into<String>) -> AllowedOutboundResource<'_, C> {
        AllowedOutboundResource::new(self, project_id.into())
    }
}

/// The decoded wrapper around a raw response: HTTP metadata plus the JSON
/// body, when one was returned.
#[derive(Debug)]
pub struct ResponseEnvelope {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The parsed JSON body; `None` for empty (delete-style) responses.
    pub body: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Decode the body into a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, SkiffError> {
        let Some(body) = self.body else {
            return Err(SkiffError::Decode {
                path: ".".to_owned(),
                source: serde::de::Error::custom("response body was empty"),
            });
        };
        SkiffError::decode_value(body)
    }
}

/// Wire shape of a non-2xx error body. Every field is tolerated missing.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

pub(crate) struct ClientInner<C: HttpClient> {
    http: C,
    config: ClientConfig,
    auth: Arc<dyn Authenticator>,
}

impl<C: HttpClient> ClientInner<C> {
    /// Execute `spec` and return the raw envelope.
    ///
    /// This is the single funnel every operation goes through: build (pure),
    /// authenticate, optionally gzip, send with retries, classify the
    /// outcome.
    pub(crate) async fn send(&self, spec: RequestSpec) -> Result<ResponseEnvelope, SkiffError> {
        let method = spec.method().clone();
        let mut request = spec.build(&self.config.base_url, &self.config.default_headers)?;
        self.auth.apply(&mut request.headers)?;

        if self.config.enable_gzip
            && let Some(body) = request.body.take()
        {
            request.body = Some(gzip_body(&body)?);
            request
                .headers
                .insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        }

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(%method, url = %request.url, attempt, "sending request");

            let may_retry =
                attempt <= self.config.retry.max_retries && self.config.retry.method_is_retryable(&method);

            match self.http.send(request.clone()).await {
                Ok(response) if response.status.is_success() => {
                    return envelope_from(response);
                }
                Ok(response) => {
                    if may_retry && self.config.retry.status_is_retryable(response.status) {
                        let backoff = self.config.retry.backoff(attempt);
                        warn!(
                            %method,
                            url = %request.url,
                            status = response.status.as_u16(),
                            ?backoff,
                            "transient status, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        continue;
                    }
                    return Err(api_error(response));
                }
                Err(HttpClientError::Connection(message)) => {
                    if may_retry {
                        let backoff = self.config.retry.backoff(attempt);
                        warn!(%method, url = %request.url, %message, ?backoff, "connection error, retrying");
                        tokio::time::sleep(backoff).await;
                        continue;
                    }
                    return Err(SkiffError::Connection(message));
                }
                // A deadline elapsing or external cancellation ends the call
                // lifecycle; no retry happens after it.
                Err(HttpClientError::Timeout) => return Err(SkiffError::Cancelled),
                Err(HttpClientError::Other(e)) => {
                    return Err(SkiffError::Connection(e.to_string()));
                }
            }
        }
    }

    /// Execute `spec` and decode the body into `T`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<T, SkiffError> {
        self.send(spec).await?.decode()
    }

    /// Execute `spec`, expecting no response body (delete-style calls).
    pub(crate) async fn request_empty(&self, spec: RequestSpec) -> Result<(), SkiffError> {
        self.send(spec).await?;
        Ok(())
    }
}

fn envelope_from(response: HttpResponse) -> Result<ResponseEnvelope, SkiffError> {
    let body = if response.body.is_empty() {
        None
    } else {
        Some(SkiffError::decode_json(&response.body)?)
    };
    Ok(ResponseEnvelope {
        status: response.status,
        headers: response.headers,
        body,
    })
}

/// Map a non-2xx response to [`SkiffError::Api`] or [`SkiffError::Conflict`],
/// parsing the error body when the server sent one.
fn api_error(response: HttpResponse) -> SkiffError {
    let status = response.status.as_u16();
    let parsed: Option<ApiErrorBody> = serde_json::from_slice(&response.body).ok();
    let (code, message) = match parsed {
        Some(body) => (
            body.code,
            body.message.unwrap_or_else(|| default_message(response.status)),
        ),
        None => (None, default_message(response.status)),
    };

    match response.status {
        StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => SkiffError::Conflict {
            status,
            code,
            message,
        },
        _ => SkiffError::Api {
            status,
            code,
            message,
        },
    }
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_owned()
}

fn gzip_body(body: &Bytes) -> Result<Bytes, SkiffError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(body)
        .and_then(|()| encoder.finish())
        .map(Bytes::from)
        .map_err(|e| SkiffError::Validation(format!("failed to compress request body: {e}")))
}
