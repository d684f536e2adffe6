//! Service-binding resource.

use std::sync::Arc;

use http::Method;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{Binding, BindingCreate, ListBindingsResponse, ListParams};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on bindings within a project.
///
/// Bindings are replace-only: there is no update call. To change one, delete
/// it and create a replacement.
pub struct BindingsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> BindingsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of bindings.
    pub async fn list(&self, params: &ListParams) -> Result<ListBindingsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/bindings")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all bindings in the project.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListBindingsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/bindings".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create a binding.
    pub async fn create(&self, req: &BindingCreate) -> Result<Binding, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/bindings")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a binding by ID.
    pub async fn get(&self, id: &str) -> Result<Binding, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/bindings/{id}")
            .path_param("project_id", &self.project_id)
            .path_param("id", id);
        self.client.inner.request(spec).await
    }

    /// Delete a binding.
    pub async fn delete(&self, id: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/bindings/{id}")
            .path_param("project_id", &self.project_id)
            .path_param("id", id);
        self.client.inner.request_empty(spec).await
    }
}
