//! Per-key tag payload
//!
//! A tag is more than a string for some services: Auto Scaling groups carry a
//! `propagate_at_launch` flag next to each value, for example. `TagData` keeps
//! the plain value together with any such side fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Data attached to a single tag key
///
/// Equality is structural across all three fields. An absent `value` is not
/// equal to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagData {
    /// Additional boolean fields, keyed by snake_case field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_bool_fields: BTreeMap<String, Option<bool>>,

    /// Additional string fields, keyed by snake_case field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_string_fields: BTreeMap<String, Option<String>>,

    /// The tag value
    #[serde(default)]
    pub value: Option<String>,
}

impl TagData {
    /// Create tag data holding only a value
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Attach an additional boolean field
    #[must_use]
    pub fn bool_field(mut self, name: impl Into<String>, value: Option<bool>) -> Self {
        self.additional_bool_fields.insert(name.into(), value);
        self
    }

    /// Attach an additional string field
    #[must_use]
    pub fn string_field(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.additional_string_fields.insert(name.into(), value);
        self
    }

    /// The value as a string slice, if present
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for TagData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::with_capacity(3);

        if !self.additional_bool_fields.is_empty() {
            let entries: Vec<String> = self
                .additional_bool_fields
                .iter()
                .map(|(k, v)| match v {
                    Some(b) => format!("{k}:{b}"),
                    None => format!("{k}:"),
                })
                .collect();
            fields.push(format!("AdditionalBoolFields: map[{}]", entries.join(" ")));
        }

        if !self.additional_string_fields.is_empty() {
            let entries: Vec<String> = self
                .additional_string_fields
                .iter()
                .map(|(k, v)| format!("{k}:{}", v.as_deref().unwrap_or_default()))
                .collect();
            fields.push(format!("AdditionalStringFields: map[{}]", entries.join(" ")));
        }

        if let Some(value) = &self.value {
            fields.push(format!("Value: {value}"));
        }

        write!(f, "TagData{{{}}}", fields.join(", "))
    }
}
