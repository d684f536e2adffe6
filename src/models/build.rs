//! Build and build-run models.

use serde::{Deserialize, Serialize};

use super::common::Field;
use super::pagination::{ListNext, impl_paginated};

/// A build template turning a source repository into a container image.
#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    /// Build name, unique within the project.
    pub name: Option<String>,
    /// Build identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// Git URL of the source repository.
    pub source_url: Option<String>,
    /// Branch, tag or commit to build.
    pub source_revision: Option<String>,
    /// Build strategy: `"dockerfile"` or `"buildpacks"`.
    pub strategy_type: Option<String>,
    /// Image reference the build pushes to.
    pub output_image: Option<String>,
    /// Registry secret used for the push.
    pub output_secret: Option<String>,
    /// Template state: `"ready"` or `"failed"`.
    pub status: Option<String>,
    /// Human-readable explanation of the current status.
    pub reason: Option<String>,
    /// Version tag for `If-Match` preconditions on updates.
    pub entity_tag: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this build.
    pub href: Option<String>,
    /// Always `"build_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating a build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildCreate {
    /// Build name. Required.
    pub name: String,
    /// Git URL of the source repository. Required.
    pub source_url: String,
    /// Image reference to push to. Required.
    pub output_image: String,
    /// Registry secret used for the push. Required.
    pub output_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<String>,
}

/// Merge-patch payload for updating a build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// `Null` clears the pin and builds the default branch.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source_revision: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_secret: Option<String>,
}

/// One execution of a build.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildRun {
    /// Run name, unique within the project.
    pub name: Option<String>,
    /// Run identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// The build this run was created from, if any.
    pub build_name: Option<String>,
    /// Execution state: `"pending"`, `"running"`, `"succeeded"`, `"failed"`.
    pub status: Option<String>,
    /// Human-readable explanation of the current status.
    pub reason: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Completion timestamp, once the run finished.
    pub completed_at: Option<String>,
    /// Canonical URL of this run.
    pub href: Option<String>,
    /// Always `"build_run_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for launching a build run from an existing build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildRunCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The build template to run. Required by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_name: Option<String>,
    /// Override the template's revision for this run only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
}

/// One page of builds.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBuildsResponse {
    /// Builds on this page, in server order.
    #[serde(default)]
    pub builds: Vec<Build>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListBuildsResponse, builds, Build);

/// One page of build runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBuildRunsResponse {
    /// Runs on this page, in server order.
    #[serde(default)]
    pub build_runs: Vec<BuildRun>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListBuildRunsResponse, build_runs, BuildRun);
