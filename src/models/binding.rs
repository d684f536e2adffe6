//! Service-binding models.

use serde::{Deserialize, Serialize};

use super::common::ComponentRef;
use super::pagination::{ListNext, impl_paginated};

/// A binding exposing a secret's credentials to a component's environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Binding identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// The component the secret is mounted into.
    pub component: Option<ComponentRef>,
    /// The bound secret.
    pub secret_name: Option<String>,
    /// Environment-variable prefix for the injected credentials.
    pub prefix: Option<String>,
    /// Binding state: `"active"` or `"failed"`.
    pub status: Option<String>,
    /// Canonical URL of this binding.
    pub href: Option<String>,
    /// Always `"binding_v2"`.
    pub resource_type: Option<String>,
}

/// Payload for creating a binding.
#[derive(Debug, Clone, Serialize)]
pub struct BindingCreate {
    /// The component to bind into. Required.
    pub component: ComponentRef,
    /// The secret to bind. Required.
    pub secret_name: String,
    /// Environment-variable prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// One page of bindings.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBindingsResponse {
    /// Bindings on this page, in server order.
    #[serde(default)]
    pub bindings: Vec<Binding>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListBindingsResponse, bindings, Binding);
