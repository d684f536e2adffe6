//! Request construction: URL templating, query encoding, header layering.

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::SkiffError;

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// A single API request under construction.
///
/// `RequestSpec` is pure: building one performs no I/O. It is created per
/// call by a resource operation, consumed once by the client, and discarded.
///
/// Path parameters are substituted into `{name}` placeholders in the URL
/// template. Every placeholder must have a corresponding non-empty value or
/// [`build`](Self::build) fails with [`SkiffError::Validation`] before any
/// network access.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestSpec {
    /// Start a request for `method` on a URL path template like
    /// `/projects/{project_id}/apps/{name}`.
    pub fn new(method: Method, template: impl Into<String>) -> Self {
        Self {
            method,
            template: template.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Supply a value for a `{name}` placeholder in the template.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a query parameter when `value` is `Some`.
    ///
    /// Absent values are omitted entirely, not sent as empty strings.
    #[must_use]
    pub fn query_opt(mut self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        if let Some(v) = value {
            self.query.push((name.into(), v.to_string()));
        }
        self
    }

    /// Set a caller header.
    ///
    /// Caller headers win over SDK defaults: the client only fills gaps, it
    /// never clobbers a header set here.
    pub fn header(mut self, name: HeaderName, value: &str) -> Result<Self, SkiffError> {
        let value = HeaderValue::from_str(value)
            .map_err(|_| SkiffError::Validation(format!("invalid value for header `{name}`")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set a caller header when `value` is `Some`.
    pub fn header_opt(self, name: HeaderName, value: Option<&str>) -> Result<Self, SkiffError> {
        match value {
            Some(v) => self.header(name, v),
            None => Ok(self),
        }
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, SkiffError> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            SkiffError::Validation(format!("failed to serialize request body: {e}"))
        })?;
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }

    /// The HTTP method of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Resolve this spec against `base_url` into a sendable [`HttpRequest`].
    ///
    /// `default_headers` are the client-level defaults; they fill gaps in the
    /// caller-supplied headers but never override them. `Accept:
    /// application/json` is always set (filled, not clobbered), and a JSON
    /// body sets `Content-Type: application/json`.
    pub(crate) fn build(
        self,
        base_url: &str,
        default_headers: &HeaderMap,
    ) -> Result<crate::http_client::HttpRequest, SkiffError> {
        let path = substitute_path(&self.template, &self.path_params)?;

        let mut url = format!("{}{}", base_url.trim_end_matches('/'), path);
        if !self.query.is_empty() {
            let encoded: String = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }

        let mut headers = self.headers;
        for (name, value) in default_headers {
            headers.entry(name).or_insert_with(|| value.clone());
        }
        headers.entry(ACCEPT).or_insert(APPLICATION_JSON);
        if self.body.is_some() {
            headers.entry(CONTENT_TYPE).or_insert(APPLICATION_JSON);
        }

        Ok(crate::http_client::HttpRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}

/// Substitute `{name}` placeholders, validating that every placeholder has a
/// non-empty value.
fn substitute_path(template: &str, params: &[(String, String)]) -> Result<String, SkiffError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(SkiffError::Validation(format!(
                "malformed URL template `{template}`: unclosed placeholder"
            )));
        };
        let name = &after[..close];

        let value = params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| {
                SkiffError::Validation(format!("missing required path parameter `{name}`"))
            })?;
        if value.is_empty() {
            return Err(SkiffError::Validation(format!(
                "path parameter `{name}` must not be empty"
            )));
        }

        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
