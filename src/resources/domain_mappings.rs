//! Domain-mapping resource.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{
    DomainMapping, DomainMappingCreate, DomainMappingPatch, ListDomainMappingsResponse, ListParams,
};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on domain mappings within a project.
pub struct DomainMappingsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> DomainMappingsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of domain mappings.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ListDomainMappingsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/domain_mappings")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all domain mappings in the project.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListDomainMappingsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/domain_mappings".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create a domain mapping. Point the domain's DNS at the returned
    /// `cname_target` to finish setup.
    pub async fn create(&self, req: &DomainMappingCreate) -> Result<DomainMapping, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/domain_mappings")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a domain mapping by domain name.
    pub async fn get(&self, name: &str) -> Result<DomainMapping, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/domain_mappings/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Merge-patch a domain mapping, guarded by its current `entity_tag`.
    pub async fn update(
        &self,
        name: &str,
        entity_tag: &str,
        patch: &DomainMappingPatch,
    ) -> Result<DomainMapping, SkiffError> {
        let spec = RequestSpec::new(Method::PATCH, "/projects/{project_id}/domain_mappings/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name)
            .header(IF_MATCH, entity_tag)?
            .json(patch)?;
        self.client.inner.request(spec).await
    }

    /// Delete a domain mapping.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/domain_mappings/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
