//! The `TagSet` container
//!
//! A `TagSet` maps tag keys to optional [`TagData`]. A key mapped to `None`
//! is present but carries no data, which is what a bare list of keys turns
//! into. Every transforming operation borrows its inputs and returns a fresh
//! set, so a `TagSet` can be shared freely between readers.
//!
//! # Examples
//!
//! ```
//! use tagset::tags::TagSet;
//!
//! let old = TagSet::from_values([("env", "dev"), ("team", "core")]);
//! let new = TagSet::from_values([("env", "prod"), ("owner", "ops")]);
//!
//! assert_eq!(old.removed(&new).keys(), vec!["team"]);
//! assert_eq!(old.updated(&new).len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::config::{DefaultConfig, IgnoreConfig};
use super::data::TagData;

/// Prefix reserved for tags managed by AWS itself
pub const AWS_TAG_KEY_PREFIX: &str = "aws:";
/// Prefix of tags added by Elastic Beanstalk
pub const ELASTICBEANSTALK_TAG_KEY_PREFIX: &str = "elasticbeanstalk:";
/// Name tag that Elastic Beanstalk sets on its environments
pub const NAME_TAG_KEY: &str = "Name";
/// Prefix of tags added by RDS
pub const RDS_TAG_KEY_PREFIX: &str = "rds:";
/// Prefix of tags added by the Serverless Application Repository
pub const SERVERLESS_APPLICATION_REPOSITORY_TAG_KEY_PREFIX: &str = "serverlessrepo:";

/// Mapping of tag key to optional tag data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(HashMap<String, Option<TagData>>);

impl TagSet {
    /// Create an empty tag set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tag set from plain key/value pairs
    ///
    /// Empty values are kept as present, empty values.
    #[must_use]
    pub fn from_values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(TagData::with_value(v))))
                .collect(),
        )
    }

    /// Build a tag set from key/optional value pairs
    ///
    /// A `None` value produces a key without tag data.
    #[must_use]
    pub fn from_optional_values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(TagData::with_value)))
                .collect(),
        )
    }

    /// Build a tag set from key/tag data pairs
    #[must_use]
    pub fn from_tag_data<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<TagData>)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a tag set containing only keys, none of which carry data
    #[must_use]
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(keys.into_iter().map(|k| (k.into(), None)).collect())
    }

    /// Build a tag set from an untyped JSON object
    ///
    /// Every member becomes a key. String members become the tag value; any
    /// other member leaves the value absent.
    #[must_use]
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        Self(
            map.iter()
                .map(|(k, v)| {
                    let data = TagData {
                        value: v.as_str().map(str::to_string),
                        ..TagData::default()
                    };
                    (k.clone(), Some(data))
                })
                .collect(),
        )
    }

    /// Build a tag set from an untyped JSON value
    ///
    /// Objects are handled by [`TagSet::from_json_map`]. Arrays contribute
    /// their string elements as data-less keys. Anything else yields an
    /// empty set; this never fails.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_json_map(map),
            Value::Array(items) => {
                let keys = items.iter().filter_map(|item| {
                    let key = item.as_str();
                    if key.is_none() {
                        tracing::debug!(element = %item, "skipping non-string tag key");
                    }
                    key
                });
                Self::from_keys(keys)
            }
            other => {
                tracing::debug!(kind = json_kind(other), "unsupported tag source, using empty tag set");
                Self::new()
            }
        }
    }

    /// Number of keys in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys and their tag data, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TagData>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    fn filter(&self, keep: impl Fn(&str) -> bool) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(k, _)| keep(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Drop tags whose key starts with any of `prefixes`
    fn without_prefixes(&self, prefixes: &[&str]) -> Self {
        self.filter(|k| !prefixes.iter().any(|p| k.starts_with(p)))
    }

    /// Remove tags managed by AWS (`aws:` prefix)
    #[must_use]
    pub fn ignore_aws(&self) -> Self {
        self.without_prefixes(&[AWS_TAG_KEY_PREFIX])
    }

    /// Remove tags managed by AWS and Elastic Beanstalk, including `Name`
    #[must_use]
    pub fn ignore_elasticbeanstalk(&self) -> Self {
        self.filter(|k| {
            k != NAME_TAG_KEY
                && !k.starts_with(AWS_TAG_KEY_PREFIX)
                && !k.starts_with(ELASTICBEANSTALK_TAG_KEY_PREFIX)
        })
    }

    /// Remove tags managed by AWS and RDS
    #[must_use]
    pub fn ignore_rds(&self) -> Self {
        self.without_prefixes(&[AWS_TAG_KEY_PREFIX, RDS_TAG_KEY_PREFIX])
    }

    /// Remove tags managed by AWS and the Serverless Application Repository
    #[must_use]
    pub fn ignore_serverless_application_repository(&self) -> Self {
        self.without_prefixes(&[
            AWS_TAG_KEY_PREFIX,
            SERVERLESS_APPLICATION_REPOSITORY_TAG_KEY_PREFIX,
        ])
    }

    /// Remove tags whose key starts with any key of `prefixes`
    ///
    /// Only the keys of `prefixes` matter; its tag data is ignored.
    #[must_use]
    pub fn ignore_prefixes(&self, prefixes: &Self) -> Self {
        self.filter(|k| !prefixes.0.keys().any(|p| k.starts_with(p.as_str())))
    }

    /// Remove tags whose key is present in `keys`
    #[must_use]
    pub fn ignore(&self, keys: &Self) -> Self {
        self.filter(|k| !keys.0.contains_key(k))
    }

    /// Apply an ignore configuration: prefixes first, then exact keys
    ///
    /// Without a configuration the tags are returned as they are.
    #[must_use]
    pub fn ignore_config(&self, config: Option<&IgnoreConfig>) -> Self {
        match config {
            Some(config) => self
                .ignore_prefixes(&config.key_prefixes)
                .ignore(&config.keys),
            None => self.clone(),
        }
    }

    /// Keep only tags whose key is present in `keys`
    #[must_use]
    pub fn only(&self, keys: &Self) -> Self {
        self.filter(|k| keys.0.contains_key(k))
    }

    /// Union of both sets, where `other` wins on key collisions
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut result = self.0.clone();
        for (k, v) in &other.0 {
            result.insert(k.clone(), v.clone());
        }
        Self(result)
    }

    /// Tags of `self` whose key no longer exists in `new`
    #[must_use]
    pub fn removed(&self, new: &Self) -> Self {
        self.filter(|k| !new.0.contains_key(k))
    }

    /// Tags of `new` that are missing from `self` or carry different data
    #[must_use]
    pub fn updated(&self, new: &Self) -> Self {
        Self(
            new.0
                .iter()
                .filter(|(k, v)| self.0.get(k.as_str()) != Some(*v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Whether every tag of `target` exists in `self` with equal data
    ///
    /// `self` may hold additional keys.
    #[must_use]
    pub fn contains_all(&self, target: &Self) -> bool {
        target
            .0
            .iter()
            .all(|(k, v)| self.0.get(k.as_str()) == Some(v))
    }

    /// Whether both sets hold exactly the same keys with equal data
    ///
    /// This is the same comparison as `==`. A missing set is represented as
    /// `Option<TagSet>::None`, which compares equal only to another `None`.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Split the set into chunks of at most `size` tags
    ///
    /// Keys are assigned in sorted order, so the split is stable across
    /// calls. A `size` of zero is treated as one.
    #[must_use]
    pub fn chunks(&self, size: usize) -> Vec<Self> {
        let size = size.max(1);
        let mut keys: Vec<&String> = self.0.keys().collect();
        keys.sort();

        keys.chunks(size)
            .map(|chunk| {
                Self(
                    chunk
                        .iter()
                        .map(|k| ((*k).clone(), self.0[k.as_str()].clone()))
                        .collect(),
                )
            })
            .collect()
    }

    /// Drop tags that are inherited unchanged from the provider defaults
    ///
    /// Tags missing from the defaults, or present with different data, are
    /// kept. Without defaults the tags are returned as they are.
    #[must_use]
    pub fn remove_default_config(&self, config: Option<&DefaultConfig>) -> Self {
        let Some(defaults) = config.and_then(DefaultConfig::get_tags) else {
            return self.clone();
        };

        Self(
            self.0
                .iter()
                .filter(|(k, v)| defaults.0.get(k.as_str()) != Some(*v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// All keys, in no particular order
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// All tag data, in no particular order
    #[must_use]
    pub fn values(&self) -> Vec<Option<&TagData>> {
        self.0.values().map(Option::as_ref).collect()
    }

    /// Flatten to a plain key/value map
    ///
    /// Keys without data or without a value map to an empty string.
    #[must_use]
    pub fn map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| {
                let value = v
                    .as_ref()
                    .and_then(TagData::value)
                    .unwrap_or_default()
                    .to_string();
                (k.clone(), value)
            })
            .collect()
    }

    /// The value of a tag, if the key exists and has one
    #[must_use]
    pub fn key_value(&self, key: &str) -> Option<&str> {
        self.key_tag_data(key)?.value()
    }

    /// The tag data of a key, if the key exists and has data
    #[must_use]
    pub fn key_tag_data(&self, key: &str) -> Option<&TagData> {
        self.0.get(key)?.as_ref()
    }

    /// An additional boolean field of a tag
    #[must_use]
    pub fn key_additional_bool_value(&self, key: &str, field: &str) -> Option<bool> {
        self.key_tag_data(key)?
            .additional_bool_fields
            .get(field)
            .copied()
            .flatten()
    }

    /// An additional string field of a tag
    #[must_use]
    pub fn key_additional_string_value(&self, key: &str, field: &str) -> Option<&str> {
        self.key_tag_data(key)?
            .additional_string_fields
            .get(field)?
            .as_deref()
    }

    /// Whether the key exists, with or without data
    #[must_use]
    pub fn key_exists(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Order-independent hash of keys and values
    ///
    /// Each tag contributes the CRC-32 of `key` or `key-value`, combined
    /// with XOR. An empty set hashes to zero. Additional fields are not
    /// included and collisions are possible.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.0.iter().fold(0, |acc, (k, v)| {
            let entry = match v.as_ref().and_then(TagData::value) {
                Some(value) => format!("{k}-{value}"),
                None => k.clone(),
            };
            acc ^ u64::from(crc32fast::hash(entry.as_bytes()))
        })
    }

    /// Sorted key/value pairs of tags that have a value
    fn sorted_pairs(&self) -> BTreeMap<&str, &str> {
        self.0
            .iter()
            .filter_map(|(k, v)| Some((k.as_str(), v.as_ref()?.value()?)))
            .collect()
    }

    /// Form-encoded query string of the tags that have a value, sorted by key
    #[must_use]
    pub fn url_encode(&self) -> String {
        self.sorted_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", query_escape(k), query_escape(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Unencoded query string of the tags that have a value, sorted by key
    #[must_use]
    pub fn url_query_string(&self) -> String {
        self.sorted_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn query_escape(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted: BTreeMap<&String, &Option<TagData>> = self.0.iter().collect();
        let entries: Vec<String> = sorted
            .into_iter()
            .map(|(k, v)| match v {
                Some(data) => format!("{k}:{data}"),
                None => format!("{k}:"),
            })
            .collect();
        write!(f, "map[{}]", entries.join(" "))
    }
}

impl<K, V> FromIterator<(K, V)> for TagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl From<HashMap<String, String>> for TagSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self::from_values(map)
    }
}

impl From<BTreeMap<String, String>> for TagSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::from_values(map)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = (&'a String, &'a Option<TagData>);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Option<TagData>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod set_tests;
