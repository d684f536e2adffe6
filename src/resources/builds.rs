//! Build and build-run resources.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{
    Build, BuildCreate, BuildPatch, BuildRun, BuildRunCreate, ListBuildRunsResponse,
    ListBuildsResponse, ListParams,
};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on builds within a project.
pub struct BuildsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> BuildsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of builds.
    pub async fn list(&self, params: &ListParams) -> Result<ListBuildsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/builds")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all builds in the project.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListBuildsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/builds".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create a build.
    pub async fn create(&self, req: &BuildCreate) -> Result<Build, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/builds")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a build by name.
    pub async fn get(&self, name: &str) -> Result<Build, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/builds/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Merge-patch a build, guarded by its current `entity_tag`.
    pub async fn update(
        &self,
        name: &str,
        entity_tag: &str,
        patch: &BuildPatch,
    ) -> Result<Build, SkiffError> {
        let spec = RequestSpec::new(Method::PATCH, "/projects/{project_id}/builds/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name)
            .header(IF_MATCH, entity_tag)?
            .json(patch)?;
        self.client.inner.request(spec).await
    }

    /// Delete a build.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/builds/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}

/// Operations on build runs within a project.
pub struct BuildRunsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> BuildRunsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of build runs, optionally filtered to one build.
    pub async fn list(
        &self,
        params: &ListParams,
        build_name: Option<&str>,
    ) -> Result<ListBuildRunsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/build_runs")
            .path_param("project_id", &self.project_id)
            .query_opt("build_name", build_name)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all build runs, optionally filtered to one
    /// build.
    pub fn list_all(
        &self,
        params: &ListParams,
        build_name: Option<&str>,
    ) -> Result<Pager<C, ListBuildRunsResponse>, SkiffError> {
        let mut extra_query = Vec::new();
        if let Some(build_name) = build_name {
            extra_query.push(("build_name".to_owned(), build_name.to_owned()));
        }
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/build_runs".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            extra_query,
        )
    }

    /// Launch a build run. Not retried automatically under the default
    /// policy.
    pub async fn create(&self, req: &BuildRunCreate) -> Result<BuildRun, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/build_runs")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a build run by name.
    pub async fn get(&self, name: &str) -> Result<BuildRun, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/build_runs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Delete a build run, cancelling it if still executing.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/build_runs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
