//! Types shared across resource models.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A patchable field that distinguishes "not provided" from "clear this".
///
/// Merge-patch semantics: an `Unset` field is omitted from the JSON entirely
/// (the server leaves it untouched), `Null` is sent as an explicit `null`
/// (the server clears it), and `Value` replaces it.
///
/// Patch structs pair this with
/// `#[serde(default, skip_serializing_if = "Field::is_unset")]`.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// Not provided; omitted on the wire.
    #[default]
    Unset,
    /// Explicit `null`: clear the server-side value.
    Null,
    /// Replace the server-side value.
    Value(T),
}

impl<T> Field<T> {
    /// True when the field was not provided at all.
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// The contained value, if one was provided.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Unset => f.write_str("Unset"),
            Field::Null => f.write_str("Null"),
            Field::Value(v) => write!(f, "Value({v:?})"),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset is skipped by the containing struct; serializing it
            // anyway degrades to null rather than inventing a value.
            Field::Unset | Field::Null => serializer.serialize_none(),
            Field::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing key never reaches here (that's `#[serde(default)]`), so
        // any incoming value is either null or a real value.
        let opt = Option::<T>::deserialize(deserializer)?;
        Ok(match opt {
            None => Field::Null,
            Some(v) => Field::Value(v),
        })
    }
}

/// An environment variable attached to an app or job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnvVar {
    /// How the variable is sourced: `"literal"` or `"secret_key_reference"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Variable name as seen by the workload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Literal value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Name of the referenced secret or config map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Key within the referenced resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A reference to a project component (an app or a job) by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentRef {
    /// Component name.
    pub name: String,
    /// Component kind: `"app_v2"` or `"job_v2"`.
    pub resource_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        memory: Field<String>,
    }

    #[test]
    fn unset_fields_are_absent_from_json() {
        let patch = Patch::default();
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn null_field_serializes_as_explicit_null() {
        let patch = Patch {
            name: None,
            memory: Field::Null,
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"memory":null}"#);
    }

    #[test]
    fn value_field_serializes_as_value() {
        let patch = Patch {
            name: Some("web".to_owned()),
            memory: Field::Value("4G".to_owned()),
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"name":"web","memory":"4G"}"#
        );
    }

    #[test]
    fn round_trip_distinguishes_null_from_missing() {
        let patch: Patch = serde_json::from_str(r#"{"memory":null}"#).unwrap();
        assert_eq!(patch.memory, Field::Null);

        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert!(patch.memory.is_unset());
    }
}
