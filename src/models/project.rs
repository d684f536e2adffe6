//! Project models.

use serde::{Deserialize, Serialize};

use super::pagination::{ListNext, impl_paginated};

/// A project: the isolation boundary all other resources live inside.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Project identifier (a GUID).
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Region the project is provisioned in.
    pub region: Option<String>,
    /// Account that owns the project.
    pub account_id: Option<String>,
    /// Provisioning state: `"active"`, `"creating"`, `"deleting"`, ...
    pub status: Option<String>,
    /// Human-readable explanation of the current status.
    pub reason: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this project.
    pub href: Option<String>,
    /// Always `"project_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating a project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreate {
    /// Display name. Required.
    pub name: String,
    /// Target region; the account default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// User tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A soft-deleted project pending reclamation.
///
/// Deleted projects linger for a grace period during which they can be
/// restored; the reclamation records that window.
#[derive(Debug, Clone, Deserialize)]
pub struct Reclamation {
    /// Reclamation identifier.
    pub id: Option<String>,
    /// The project this reclamation belongs to.
    pub project_id: Option<String>,
    /// Reclamation state: `"scheduled"`, `"in_progress"`, ...
    pub status: Option<String>,
    /// Human-readable explanation of the current status.
    pub reason: Option<String>,
    /// When the project will be permanently removed (RFC 3339).
    pub target_time: Option<String>,
    /// Always `"reclamation_v2"`.
    pub resource_type: Option<String>,
}

/// One page of projects.
#[derive(Debug, Clone, Deserialize)]
pub struct ListProjectsResponse {
    /// Projects on this page, in server order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListProjectsResponse, projects, Project);
