//! App models.

use serde::{Deserialize, Serialize};

use super::common::{EnvVar, Field};
use super::pagination::{ListNext, impl_paginated};

/// A scale-to-zero HTTP application.
#[derive(Debug, Clone, Deserialize)]
pub struct App {
    /// App name, unique within the project.
    pub name: Option<String>,
    /// App identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// Container image the app runs.
    pub image_reference: Option<String>,
    /// Port the container listens on.
    pub image_port: Option<i64>,
    /// Minimum number of instances (0 enables scale-to-zero).
    pub scale_min_instances: Option<i64>,
    /// Maximum number of instances.
    pub scale_max_instances: Option<i64>,
    /// CPU limit per instance, e.g. `"1"`.
    pub scale_cpu_limit: Option<String>,
    /// Memory limit per instance, e.g. `"4G"`.
    pub scale_memory_limit: Option<String>,
    /// Environment variables injected into each instance.
    pub run_env_variables: Option<Vec<EnvVar>>,
    /// Public endpoint URL, once the app is reachable.
    pub endpoint: Option<String>,
    /// Deployment state: `"ready"`, `"deploying"`, `"failed"`, ...
    pub status: Option<String>,
    /// Human-readable explanation of the current status.
    pub reason: Option<String>,
    /// Version tag for `If-Match` preconditions on updates.
    pub entity_tag: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this app.
    pub href: Option<String>,
    /// Always `"app_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating an app.
#[derive(Debug, Clone, Serialize)]
pub struct AppCreate {
    /// App name. Required.
    pub name: String,
    /// Container image. Required.
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVar>>,
}

/// Merge-patch payload for updating an app.
///
/// Unset fields are absent from the JSON and left untouched server-side;
/// [`Field::Null`] sends an explicit `null` to clear a limit back to the
/// platform default.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_instances: Option<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scale_cpu_limit: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub scale_memory_limit: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVar>>,
}

/// One page of apps.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAppsResponse {
    /// Apps on this page, in server order.
    #[serde(default)]
    pub apps: Vec<App>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListAppsResponse, apps, App);
