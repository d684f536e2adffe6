//! Config-map models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pagination::{ListNext, impl_paginated};

/// Non-sensitive key/value configuration consumable by apps and jobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigMap {
    /// Config-map name, unique within the project.
    pub name: Option<String>,
    /// Config-map identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// The key/value payload.
    pub data: Option<BTreeMap<String, String>>,
    /// Version tag for `If-Match` preconditions on replace.
    pub entity_tag: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this config map.
    pub href: Option<String>,
    /// Always `"config_map_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating or replacing a config map.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigMapCreate {
    /// Config-map name. Required.
    pub name: String,
    /// The key/value payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}

/// One page of config maps.
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfigMapsResponse {
    /// Config maps on this page, in server order.
    ///
    /// The wire key is `configmaps`, without an underscore.
    #[serde(default, rename = "configmaps")]
    pub config_maps: Vec<ConfigMap>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListConfigMapsResponse, config_maps, ConfigMap);
