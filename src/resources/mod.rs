//! Resource namespaces for the Skiff API.
//!
//! Each namespace is a thin borrow of the client composing the request
//! builder, transport and pager; no resource logic lives here beyond paths
//! and payloads.

mod allowed_outbound;
mod apps;
mod bindings;
mod builds;
mod config_maps;
mod domain_mappings;
mod jobs;
mod projects;
mod secrets;

pub use allowed_outbound::AllowedOutboundResource;
pub use apps::AppsResource;
pub use bindings::BindingsResource;
pub use builds::{BuildRunsResource, BuildsResource};
pub use config_maps::ConfigMapsResource;
pub use domain_mappings::DomainMappingsResource;
pub use jobs::{JobRunsResource, JobsResource};
pub use projects::ProjectsResource;
pub use secrets::SecretsResource;
