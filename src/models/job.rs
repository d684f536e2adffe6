//! Job and job-run models.

use serde::{Deserialize, Serialize};

use super::common::{EnvVar, Field};
use super::pagination::{ListNext, impl_paginated};

/// A batch job template. Executions are [`JobRun`]s.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Job name, unique within the project.
    pub name: Option<String>,
    /// Job identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// Container image the job runs.
    pub image_reference: Option<String>,
    /// Override for the image entrypoint.
    pub run_commands: Option<Vec<String>>,
    /// Arguments passed to the entrypoint.
    pub run_arguments: Option<Vec<String>>,
    /// Environment variables injected into each run.
    pub run_env_variables: Option<Vec<EnvVar>>,
    /// How often a failed run is retried.
    pub scale_retry_limit: Option<i64>,
    /// Version tag for `If-Match` preconditions on updates.
    pub entity_tag: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this job.
    pub href: Option<String>,
    /// Always `"job_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating a job.
#[derive(Debug, Clone, Serialize)]
pub struct JobCreate {
    /// Job name. Required.
    pub name: String,
    /// Container image. Required.
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
}

/// Merge-patch payload for updating a job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    /// `Null` clears the override and falls back to the image entrypoint.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub run_commands: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub run_arguments: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
}

/// One execution of a job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRun {
    /// Run name, unique within the project.
    pub name: Option<String>,
    /// Run identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// The job this run was created from, if any.
    pub job_name: Option<String>,
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
    /// Always `"job_run_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for launching a job run.
///
/// Either references an existing job by name (inheriting its template) or
/// supplies an image directly for an ad-hoc run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobRunCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVar>>,
}

/// One page of jobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ListJobsResponse {
    /// Jobs on this page, in server order.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListJobsResponse, jobs, Job);

/// One page of job runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ListJobRunsResponse {
    /// Runs on this page, in server order.
    #[serde(default)]
    pub job_runs: Vec<JobRun>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListJobRunsResponse, job_runs, JobRun);
