//! Config-map resource.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{ConfigMap, ConfigMapCreate, ListConfigMapsResponse, ListParams};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on config maps within a project.
pub struct ConfigMapsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> ConfigMapsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of config maps.
    pub async fn list(&self, params: &ListParams) -> Result<ListConfigMapsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/configmaps")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all config maps in the project.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListConfigMapsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/configmaps".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create a config map.
    pub async fn create(&self, req: &ConfigMapCreate) -> Result<ConfigMap, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/configmaps")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a config map by name.
    pub async fn get(&self, name: &str) -> Result<ConfigMap, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/configmaps/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Replace a config map wholesale (PUT), guarded by its current
    /// `entity_tag`. Unlike a merge-patch, keys absent from `req.data` are
    /// removed.
    pub async fn replace(
        &self,
        name: &str,
        entity_tag: &str,
        req: &ConfigMapCreate,
    ) -> Result<ConfigMap, SkiffError> {
        let spec = RequestSpec::new(Method::PUT, "/projects/{project_id}/configmaps/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name)
            .header(IF_MATCH, entity_tag)?
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Delete a config map.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/configmaps/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
