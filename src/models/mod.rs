//! Typed models for the Skiff API.
//!
//! These are data-only records. Every wire field the platform does not
//! guarantee is `Option`; decoding never fails on a missing field, only on a
//! present field of the wrong shape.

mod allowed_outbound;
mod app;
mod binding;
mod build;
mod common;
mod config_map;
mod domain_mapping;
mod job;
mod pagination;
mod project;
mod secret;

pub use allowed_outbound::{
    AllowedOutboundDestination, AllowedOutboundDestinationPatch, CidrBlockDestination,
    ListAllowedOutboundResponse, UnknownDestination,
};
pub use app::{App, AppCreate, AppPatch, ListAppsResponse};
pub use binding::{Binding, BindingCreate, ListBindingsResponse};
pub use build::{
    Build, BuildCreate, BuildPatch, BuildRun, BuildRunCreate, ListBuildRunsResponse,
    ListBuildsResponse,
};
pub use common::{ComponentRef, EnvVar, Field};
pub use config_map::{ConfigMap, ConfigMapCreate, ListConfigMapsResponse};
pub use domain_mapping::{
    DomainMapping, DomainMappingCreate, DomainMappingPatch, ListDomainMappingsResponse,
};
pub use job::{
    Job, JobCreate, JobPatch, JobRun, JobRunCreate, ListJobRunsResponse, ListJobsResponse,
};
pub use pagination::{ListNext, ListParams, Paginated};
pub use project::{ListProjectsResponse, Project, ProjectCreate, Reclamation};
pub use secret::{ListSecretsResponse, Secret, SecretCreate, SecretData};
