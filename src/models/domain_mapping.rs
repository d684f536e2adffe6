//! Domain-mapping models.

use serde::{Deserialize, Serialize};

use super::common::{ComponentRef, Field};
use super::pagination::{ListNext, impl_paginated};

/// A custom domain routed to a project component.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainMapping {
    /// The mapped domain name.
    pub name: Option<String>,
    /// Mapping identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// The component traffic is routed to.
    pub component: Option<ComponentRef>,
    /// CNAME target to point the domain's DNS at.
    pub cname_target: Option<String>,
    /// TLS secret serving the domain.
    pub tls_secret: Option<String>,
    /// Mapping state: `"ready"`, `"deploying"`, `"failed"`.
    pub status: Option<String>,
    /// Human-readable explanation of the current status.
    pub reason: Option<String>,
    /// Whether the TLS secret is caller-managed rather than platform-issued.
    pub user_managed: Option<bool>,
    /// Version tag for `If-Match` preconditions on updates.
    pub entity_tag: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this mapping.
    pub href: Option<String>,
    /// Always `"domain_mapping_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating a domain mapping.
#[derive(Debug, Clone, Serialize)]
pub struct DomainMappingCreate {
    /// The domain to map. Required.
    pub name: String,
    /// The component to route to. Required.
    pub component: ComponentRef,
    /// TLS secret serving the domain. Required.
    pub tls_secret: String,
}

/// Merge-patch payload for updating a domain mapping.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainMappingPatch {
    /// `Null` detaches the mapping from its component.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub component: Field<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_secret: Option<String>,
}

/// One page of domain mappings.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDomainMappingsResponse {
    /// Mappings on this page, in server order.
    #[serde(default)]
    pub domain_mappings: Vec<DomainMapping>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListDomainMappingsResponse, domain_mappings, DomainMapping);
