//! Resource tag sets
//!
//! This module provides the `TagSet` container and everything needed to
//! reconcile the tags of a remote resource with the tags a user configured:
//!
//! - **Construction** from plain maps, optional values, key lists or untyped JSON
//! - **Filtering** of service-managed tags (`aws:`, `rds:`, ...) and of
//!   user-configured ignore rules
//! - **Set algebra**: merge, removed, updated, only, containment and equality
//! - **Defaults**: merging provider default tags and stripping them back out
//! - **Export** to plain maps, URL query strings and a stable debug form
//!
//! # Examples
//!
//! ```
//! use tagset::tags::{DefaultConfig, IgnoreConfig, TagSet};
//!
//! let defaults = DefaultConfig::new(TagSet::from_values([("owner", "platform")]));
//! let configured = TagSet::from_values([("env", "prod")]);
//!
//! // Tags the remote resource should end up with
//! let tags_all = defaults.merge_tags(&configured);
//! assert_eq!(tags_all.len(), 2);
//!
//! // Tags read back from the remote side, minus anything we were told to ignore
//! let remote = TagSet::from_values([("env", "prod"), ("owner", "platform"), ("aws:cloudformation:stack-name", "x")]);
//! let ignore = IgnoreConfig::new(Vec::<String>::new(), ["kubernetes.io/"]);
//! let observed = remote.ignore_aws().ignore_config(Some(&ignore));
//!
//! assert_eq!(observed.remove_default_config(Some(&defaults)), configured);
//! ```

pub mod config;
pub mod data;
pub mod schema;
pub mod set;

pub use config::{DefaultConfig, IgnoreConfig};
pub use data::TagData;
pub use set::TagSet;

use heck::ToSnakeCase;

/// Convert an API field name to the snake_case name used for additional fields
///
/// ```
/// assert_eq!(tagset::tags::to_snake_case("PropagateAtLaunch"), "propagate_at_launch");
/// assert_eq!(tagset::tags::to_snake_case("ResourceARN"), "resource_arn");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    name.to_snake_case()
}
