//! Attribute descriptors for resource tag arguments
//!
//! Each function builds a new descriptor on every call. Callers own what they
//! get back and may adjust it without affecting anyone else.

use serde::{Deserialize, Serialize};

/// Attribute name for the tags configured on a resource
pub const TAGS: &str = "tags";
/// Attribute name for resource tags merged with provider default tags
pub const TAGS_ALL: &str = "tags_all";

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// Single string value
    String,
    /// Map from string keys to string values
    StringMap,
}

/// Descriptor of a single resource attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type
    pub kind: AttributeType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub force_new: bool,
    /// Deprecation message shown when the attribute is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

impl Attribute {
    const fn string_map() -> Self {
        Self {
            kind: AttributeType::StringMap,
            optional: false,
            computed: false,
            force_new: false,
            deprecated: None,
        }
    }

    /// Mark the attribute as optional
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the attribute as computed by the provider
    #[must_use]
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Changing the attribute replaces the resource
    #[must_use]
    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    /// Attach a deprecation message
    #[must_use]
    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }
}

/// Optional `tags` argument
#[must_use]
pub fn tags_schema() -> Attribute {
    Attribute::string_map().optional()
}

/// Optional `tags` argument that the remote side may also populate
#[must_use]
pub fn tags_schema_computed() -> Attribute {
    Attribute::string_map().optional().computed()
}

/// Optional `tags` argument whose change replaces the resource
#[must_use]
pub fn tags_schema_force_new() -> Attribute {
    Attribute::string_map().optional().force_new()
}

/// Computed `tags` argument kept for compatibility, with a deprecation message
#[must_use]
pub fn tags_schema_computed_deprecated(message: impl Into<String>) -> Attribute {
    tags_schema_computed().deprecated(message)
}

/// Read-only `tags_all` attribute
#[must_use]
pub fn tags_schema_truly_computed() -> Attribute {
    Attribute::string_map().computed()
}
