//! Job and job-run resources.

use std::sync::Arc;

use http::Method;
use http::header::IF_MATCH;

use crate::client::SkiffClient;
use crate::error::SkiffError;
use crate::http_client::HttpClient;
use crate::models::{
    Job, JobCreate, JobPatch, JobRun, JobRunCreate, ListJobRunsResponse, ListJobsResponse,
    ListParams,
};
use crate::pagination::Pager;
use crate::request::RequestSpec;

/// Operations on jobs within a project.
pub struct JobsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> JobsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of jobs.
    pub async fn list(&self, params: &ListParams) -> Result<ListJobsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/jobs")
            .path_param("project_id", &self.project_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all jobs in the project.
    pub fn list_all(&self, params: &ListParams) -> Result<Pager<C, ListJobsResponse>, SkiffError> {
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/jobs".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            Vec::new(),
        )
    }

    /// Create a job.
    pub async fn create(&self, req: &JobCreate) -> Result<Job, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/jobs")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a job by name.
    pub async fn get(&self, name: &str) -> Result<Job, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/jobs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Merge-patch a job, guarded by its current `entity_tag`.
    pub async fn update(
        &self,
        name: &str,
        entity_tag: &str,
        patch: &JobPatch,
    ) -> Result<Job, SkiffError> {
        let spec = RequestSpec::new(Method::PATCH, "/projects/{project_id}/jobs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name)
            .header(IF_MATCH, entity_tag)?
            .json(patch)?;
        self.client.inner.request(spec).await
    }

    /// Delete a job. Runs already created from it are unaffected.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/jobs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}

/// Operations on job runs within a project.
pub struct JobRunsResource<'c, C: HttpClient> {
    client: &'c SkiffClient<C>,
    project_id: String,
}

impl<'c, C: HttpClient> JobRunsResource<'c, C> {
    pub(crate) fn new(client: &'c SkiffClient<C>, project_id: String) -> Self {
        Self { client, project_id }
    }

    /// List one page of job runs, optionally filtered to one job.
    pub async fn list(
        &self,
        params: &ListParams,
        job_name: Option<&str>,
    ) -> Result<ListJobRunsResponse, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/job_runs")
            .path_param("project_id", &self.project_id)
            .query_opt("job_name", job_name)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.client.inner.request(spec).await
    }

    /// Return a [`Pager`] over all job runs, optionally filtered to one job.
    ///
    /// The filter is snapshotted into the pager; every page uses it.
    pub fn list_all(
        &self,
        params: &ListParams,
        job_name: Option<&str>,
    ) -> Result<Pager<C, ListJobRunsResponse>, SkiffError> {
        let mut extra_query = Vec::new();
        if let Some(job_name) = job_name {
            extra_query.push(("job_name".to_owned(), job_name.to_owned()));
        }
        Pager::new(
            Arc::clone(&self.client.inner),
            "/projects/{project_id}/job_runs".to_owned(),
            vec![("project_id".to_owned(), self.project_id.clone())],
            params,
            extra_query,
        )
    }

    /// Launch a job run.
    ///
    /// Not retried automatically under the default policy: replaying a
    /// create could start the workload twice.
    pub async fn create(&self, req: &JobRunCreate) -> Result<JobRun, SkiffError> {
        let spec = RequestSpec::new(Method::POST, "/projects/{project_id}/job_runs")
            .path_param("project_id", &self.project_id)
            .json(req)?;
        self.client.inner.request(spec).await
    }

    /// Get a job run by name.
    pub async fn get(&self, name: &str) -> Result<JobRun, SkiffError> {
        let spec = RequestSpec::new(Method::GET, "/projects/{project_id}/job_runs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request(spec).await
    }

    /// Delete a job run, cancelling it if still executing.
    pub async fn delete(&self, name: &str) -> Result<(), SkiffError> {
        let spec = RequestSpec::new(Method::DELETE, "/projects/{project_id}/job_runs/{name}")
            .path_param("project_id", &self.project_id)
            .path_param("name", name);
        self.client.inner.request_empty(spec).await
    }
}
