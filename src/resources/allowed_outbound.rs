//! Allowed-outbound-destination resource.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{
    AllowedOutboundDestination, AllowedOutboundDestinationPatch, ListAllowedOutboundResponse,
    ListParams,
};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on the project's egress allow-list.
pub struct AllowedOutboundResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> AllowedOutboundResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of allowed outbound destinations.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ListAllowedOutboundResponse, SkiffError> {
        let spec = RequestSpec::new(
            Method::GET,
            "/projects/{project_id}/allowed_outbound_destinations",
        )
        .path_param("project_id", &self.project_id)
        .query_opt("limit", params.limit)
        .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all allowed outbound destinations.
    pub fn list_all(
        &self,
        params: &ListParams,
    ) -> Result<Pager<C, ListAllowedOutboundResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/allowed_outbound_destinations".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create an allowed outbound destination.
    pub async fn create(
        &self,
        req: &AllowedOutboundDestination,
    ) -> Result<AllowedOutboundDestination, SkiffError> {
        let spec = RequestSpec::new(
            Method::POST,
            "/projects/{project_id}/allowed_outbound_destinations",
        )
        .path_param("project_id", &self.project_id)
        .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get an allowed outbound destination by name.
    pub async fn get(&self, name: &str) -> Result<AllowedOutboundDestination, SkiffError> {
        let spec = RequestSpec::new(
            Method::GET,
            "/projects/{project_id}/allowed_outbound_destinations/{name}",
        )
        .path_param("project_id", &self.project_id)
        .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Merge-patch an allowed outbound destination, guarded by its current
    /// `entity_tag`.
    pub async fn update(
        &self,
        name: &str,
        entity_tag: &str,
        patch: &AllowedOutboundDestinationPatch,
    ) -> Result<AllowedOutboundDestination, SkiffError> {
        let spec = RequestSpec::new(
            Method::PATCH,
            "/projects/{project_id}/allowed_outbound_destinations/{name}",
        )
        .path_param("project_id", &self.project_id)
        .path_param("name", name)
        .header(IF_MATCH, entity_tag)?
        .json(patch)?;
        self.client.inner.request(spec).await
    }

    /// Delete an allowed outbound destination.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(
            Method::DELETE,
            "/projects/{project_id}/allowed_outbound_destinations/{name}",
        )
        .path_param("project_id", &self.project_id)
        .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
