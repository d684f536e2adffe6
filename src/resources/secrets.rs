//! Secret resource.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{ListParams, ListSecretsResponse, Secret, SecretCreate};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on secrets within a project.
pub struct SecretsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> SecretsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of secrets. Payloads are redacted in list responses.
    pub async fn list(&self, params: &ListParams) -> Result<ListSecretsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/secrets")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all secrets in the project.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListSecretsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/secrets".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create a secret.
    pub async fn create(&self, req: &SecretCreate) -> Result<Secret, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/secrets")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a secret by name, payload included.
    pub async fn get(&self, name: &str) -> Result<Secret, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/secrets/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Replace a secret wholesale (PUT), guarded by its current `entity_tag`.
    pub async fn replace(
        &self,
        name: &str,
        entity_tag: &str,
        req: &SecretCreate,
    ) -> Result<Secret, SkiffError> {
        let spec = RequestSpec::new(Method::PUT, "/projects/{project_id}/secrets/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name)
            .header(IF_MATCH, entity_tag)?
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Delete a secret. Bindings referencing it fail on next resolution.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/secrets/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
