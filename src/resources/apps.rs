//! App resource.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{App, AppCreate, AppPatch, ListAppsResponse, ListParams};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on apps within a project.
pub struct AppsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> AppsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of apps.
    pub async fn list(&self, params: &ListParams) -> Result<ListAppsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/apps")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all apps in the project.
    pub fn list_all(&self, params: &ListParams) -> Result<Pager<C, ListAppsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/apps".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create an app.
    pub async fn create(&self, req: &AppCreate) -> Result<App, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/apps")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get an app by name.
    pub async fn get(&self, name: &str) -> Result<App, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/apps/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Merge-patch an app.
    ///
    /// `entity_tag` is the app's current version tag; a stale tag surfaces
    /// as [`SkiffError::Conflict`].
    pub async fn update(
        &self,
        name: &str,
        entity_tag: &str,
        patch: &AppPatch,
    ) -> Result<App, SkiffError> {
        let spec = RequestSpec::new(Method::PATCH, "/projects/{project_id}/apps/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name)
            .header(IF_MATCH, entity_tag)?
            .json(patch)?;
        self.client.inner.request(spec).await
    }

    /// Delete an app.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/apps/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
