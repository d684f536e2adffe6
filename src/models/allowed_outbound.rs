//! Allowed-outbound-destination models.
//!
//! This resource is polymorphic on the wire: a `type` discriminator selects
//! the concrete shape. Decoding dispatches on that field by hand so that a
//! shape this SDK predates lands in [`UnknownDestination`] instead of
//! failing; the server adds destination types faster than clients update.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::pagination::{ListNext, impl_paginated};

const CIDR_BLOCK: &str = "cidr_block";

/// An egress allow-list entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOutboundDestination {
    /// A CIDR range the project may reach.
    CidrBlock(CidrBlockDestination),
    /// A destination type this SDK does not know. All fields are preserved.
    Unknown(UnknownDestination),
}

/// The `cidr_block` destination shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CidrBlockDestination {
    /// The allowed CIDR range, e.g. `"192.0.2.0/24"`.
    pub cidr_block: String,
    /// Entry name, unique within the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version tag for `If-Match` preconditions on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_tag: Option<String>,
}

/// Raw field bag for destination types added after this SDK shipped.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownDestination {
    /// The unrecognized discriminator value, when present.
    pub kind: Option<String>,
    /// Every field of the payload, discriminator included.
    pub fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for AllowedOutboundDestination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let Value::Object(fields) = value else {
            return Err(D::Error::custom(
                "expected an object for allowed outbound destination",
            ));
        };

        match fields.get("type").and_then(Value::as_str) {
            Some(CIDR_BLOCK) => {
                let dest = serde_json::from_value(Value::Object(fields))
                    .map_err(D::Error::custom)?;
                Ok(Self::CidrBlock(dest))
            }
            kind => Ok(Self::Unknown(UnknownDestination {
                kind: kind.map(ToOwned::to_owned),
                fields,
            })),
        }
    }
}

impl Serialize for AllowedOutboundDestination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::CidrBlock(dest) => {
                let mut fields = match serde_json::to_value(dest) {
                    Ok(Value::Object(fields)) => fields,
                    Ok(_) | Err(_) => {
                        return Err(serde::ser::Error::custom(
                            "cidr_block destination did not serialize to an object",
                        ));
                    }
                };
                fields.insert("type".to_owned(), Value::String(CIDR_BLOCK.to_owned()));
                fields.serialize(serializer)
            }
            Self::Unknown(dest) => dest.fields.serialize(serializer),
        }
    }
}

/// Merge-patch payload for updating a destination.
///
/// The discriminator always travels with the patch so the server knows which
/// shape the partial fields belong to.
#[derive(Debug, Clone, Serialize)]
pub struct AllowedOutboundDestinationPatch {
    /// Discriminator of the shape being patched, e.g. `"cidr_block"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Replacement CIDR range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
}

/// One page of allowed outbound destinations.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAllowedOutboundResponse {
    /// Destinations on this page, in server order.
    #[serde(default)]
    pub allowed_outbound_destinations: Vec<AllowedOutboundDestination>,
    /// Page-size limit the server applied.
    pub limit: Option<u64>,
    /// Continuation block; absent on the final page.
    pub next: Option<ListNext>,
}

impl_paginated!(
    ListAllowedOutboundResponse,
    allowed_outbound_destinations,
    AllowedOutboundDestination
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_discriminator_decodes_the_concrete_shape() {
        let dest: AllowedOutboundDestination = serde_json::from_str(
            r#"{"type":"cidr_block","cidr_block":"192.0.2.0/24","name":"corp"}"#,
        )
        .unwrap();
        let AllowedOutboundDestination::CidrBlock(cidr) = dest else {
            panic!("expected the cidr_block variant");
        };
        assert_eq!(cidr.cidr_block, "192.0.2.0/24");
        assert_eq!(cidr.name.as_deref(), Some("corp"));
    }

    #[test]
    fn unknown_discriminator_falls_back_without_failing() {
        let dest: AllowedOutboundDestination = serde_json::from_str(
            r#"{"type":"service_endpoint","service":"dns","port":53}"#,
        )
        .unwrap();
        let AllowedOutboundDestination::Unknown(unknown) = dest else {
            panic!("expected the unknown fallback");
        };
        assert_eq!(unknown.kind.as_deref(), Some("service_endpoint"));
        assert_eq!(unknown.fields["port"], 53);
    }

    #[test]
    fn known_shape_with_wrong_field_type_is_an_error() {
        let result: Result<AllowedOutboundDestination, _> =
            serde_json::from_str(r#"{"type":"cidr_block","cidr_block":42}"#);
        assert!(result.is_err(), "present field of the wrong shape must fail");
    }

    #[test]
    fn serialization_reinstates_the_discriminator() {
        let dest = AllowedOutboundDestination::CidrBlock(CidrBlockDestination {
            cidr_block: "10.0.0.0/8".to_owned(),
            name: None,
            entity_tag: None,
        });
        let json = serde_json::to_value(&dest).unwrap();
        assert_eq!(json["type"], "cidr_block");
        assert_eq!(json["cidr_block"], "10.0.0.0/8");
    }

    #[test]
    fn unknown_round_trips_byte_for_byte() {
        let raw = r#"{"extra":true,"type":"vpn_gateway"}"#;
        let dest: AllowedOutboundDestination = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&dest).unwrap(), raw);
    }
}
