//! Secret models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pagination::{ListNext, impl_paginated};

/// Sensitive key/value data consumable by apps, jobs and bindings.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    /// Secret name, unique within the project.
    pub name: Option<String>,
    /// Secret identifier.
    pub id: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// Secret format: `"generic"`, `"registry"`, `"ssh_auth"`, `"tls"`, ...
    pub format: Option<String>,
    /// The payload. Redacted on list responses.
    pub data: Option<SecretData>,
    /// Version tag for `If-Match` preconditions on replace.
    pub entity_tag: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Canonical URL of this secret.
    pub href: Option<String>,
    /// Always `"secret_v2"`.
    pub resource_type: Option<String>,
}

/// Secret payload: well-known keys typed, everything else preserved in a
/// side-map so format additions on the server never break decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecretData {
    /// Username, for `registry` and basic-auth formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password, for `registry` and basic-auth formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Registry server, for the `registry` format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Any other keys the format carries.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Payload for creating or replacing a secret.
#[derive(Debug, Clone, Serialize)]
pub struct SecretCreate {
    /// Secret name. Required.
    pub name: String,
    /// Secret format. Required.
    pub format: String,
    /// The payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SecretData>,
}

/// One page of secrets.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSecretsResponse {
    /// Secrets on this page, in server order.
    #[serde(default)]
    pub secrets: Vec<Secret>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(ListSecretsResponse, secrets, Secret);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_land_in_the_side_map() {
        let data: SecretData = serde_json::from_str(
            r#"{"username":"u","password":"p","ssh_key":"-----BEGIN-----"}"#,
        )
        .unwrap();
        assert_eq!(data.username.as_deref(), Some("u"));
        assert_eq!(
            data.extra.get("ssh_key").and_then(|v| v.as_str()),
            Some("-----BEGIN-----")
        );
    }

    #[test]
    fn side_map_keys_serialize_back_at_the_top_level() {
        let mut data = SecretData {
            username: Some("u".to_owned()),
            ..SecretData::default()
        };
        data.extra
            .insert("token".to_owned(), serde_json::Value::String("t".to_owned()));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["username"], "u");
        assert_eq!(json["token"], "t");
        assert!(json.get("password").is_none(), "unset keys stay absent");
    }
}
