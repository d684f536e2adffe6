//! Project resource.

use std::sync::Arc;

use http::Method;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{ListParams, ListProjectsResponse, Project, ProjectCreate, Reclamation};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on projects.
pub struct ProjectsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
}

impl<'c, C: HttpClient> ProjectsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>) -> Self {
        Self { client }
    }

    /// List one page of projects.
    pub async fn list(&self, params: &ListParams) -> Result<ListProjectsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects")
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all projects.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListProjectsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects".to_owned(),
            Vec::new(),
            params,
            Vec::new(),
        )
    }

    /// Create a project. Provisioning is asynchronous; poll [`get`](Self::get)
    /// until `status` is `"active"`.
    pub async fn create(&self, req: &ProjectCreate) -> Result<Project, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects").json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a project by ID.
    pub async fn get(&self, project_id: &str) -> Result<Project, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}")
            .path_param("project_id", project_id);
        self.client.inner.request(spec).await
    }

    /// Soft-delete a project. It remains restorable until its
    /// [`Reclamation`] window closes.
    pub async fn delete(&self, project_id: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}")
            .path_param("project_id", project_id);
        self.client.inner.request_empty(spec).await
    }

    /// Get the reclamation record of a soft-deleted project.
    pub async fn get_reclamation(&self, project_id: &str) -> Result<Reclamation, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/reclamation")
            .path_param("project_id", project_id);
        self.client.inner.request(spec).await
    }
}
