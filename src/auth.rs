//! Credential injection.
//!
//! Token acquisition (API-key exchange, refresh, caching) is the job of an
//! external collaborator; the SDK only asks it to stamp credentials onto an
//! outgoing request's headers.

use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::SkiffError;

/// Attaches credentials to an outgoing request.
///
/// Implementations must be cheap and non-blocking: the client calls
/// [`apply`](Self::apply) on every attempt, including retries.
pub trait Authenticator: Send + Sync {
    /// Stamp credentials onto `headers`.
    fn apply(&self, headers: &mut HeaderMap) -> Result<(), SkiffError>;
}

/// A static bearer-token authenticator.
#[derive(Debug, Clone)]
pub struct BearerAuthenticator {
    header: HeaderValue,
}

impl BearerAuthenticator {
    /// Create an authenticator from a bearer token.
    ///
    /// Fails with [`SkiffError::Validation`] if the token is empty or not a
    /// valid header value.
    pub fn new(token: &str) -> Result<Self, SkiffError> {
        if token.is_empty() {
            return Err(SkiffError::Validation(
                "bearer token must not be empty".to_owned(),
            ));
        }
        let mut header = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| SkiffError::Validation("bearer token is not a valid header value".to_owned()))?;
        header.set_sensitive(true);
        Ok(Self { header })
    }
}

impl Authenticator for BearerAuthenticator {
    fn apply(&self, headers: &mut HeaderMap) -> Result<(), SkiffError> {
        headers.insert(AUTHORIZATION, self.header.clone());
        Ok(())
    }
}

/// An authenticator that attaches nothing. For local test servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn apply(&self, _headers: &mut HeaderMap) -> Result<(), SkiffError> {
        Ok(())
    }
}
