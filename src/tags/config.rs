//! Provider-level default tags and ignore rules

use super::set::TagSet;

/// Tags applied to every resource unless the resource overrides them
///
/// A missing configuration behaves exactly like `DefaultConfig::default()`,
/// so callers holding an `Option<DefaultConfig>` can use `unwrap_or_default`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultConfig {
    pub tags: Option<TagSet>,
}

impl DefaultConfig {
    /// Defaults holding `tags`
    #[must_use]
    pub const fn new(tags: TagSet) -> Self {
        Self { tags: Some(tags) }
    }

    /// The default tags, if any are configured
    #[must_use]
    pub const fn get_tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }

    /// Merge resource tags over the defaults
    ///
    /// Resource tags win on conflict. Without default tags, `tags` is
    /// returned as is.
    #[must_use]
    pub fn merge_tags(&self, tags: &TagSet) -> TagSet {
        match &self.tags {
            Some(defaults) => defaults.merge(tags),
            None => tags.clone(),
        }
    }

    /// Whether `tags` matches the default tags exactly
    ///
    /// Missing defaults only match missing tags. An empty set never matches
    /// a non-empty one.
    #[must_use]
    pub fn tags_equal(&self, tags: Option<&TagSet>) -> bool {
        let Some(defaults) = &self.tags else {
            return tags.is_none();
        };
        let Some(tags) = tags else {
            return false;
        };

        defaults.contains_all(tags) && tags.contains_all(defaults)
    }
}

/// Tag keys and key prefixes to leave out of comparisons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreConfig {
    /// Exact keys to ignore
    pub keys: TagSet,
    /// Key prefixes to ignore; only the keys of this set are used
    pub key_prefixes: TagSet,
}

impl IgnoreConfig {
    /// Build from exact keys and key prefixes
    #[must_use]
    pub fn new<I, J, K, P>(keys: I, key_prefixes: J) -> Self
    where
        I: IntoIterator<Item = K>,
        J: IntoIterator<Item = P>,
        K: Into<String>,
        P: Into<String>,
    {
        Self {
            keys: TagSet::from_keys(keys),
            key_prefixes: TagSet::from_keys(key_prefixes),
        }
    }

    /// Whether the configuration ignores nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.key_prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tags() -> TagSet {
        TagSet::from_values([("key1", "value1"), ("key2", "value2"), ("key3", "value3")])
    }

    #[test]
    fn test_get_tags() {
        assert!(DefaultConfig::default().get_tags().is_none());

        let config = DefaultConfig::new(three_tags());
        assert_eq!(config.get_tags(), Some(&three_tags()));
    }

    #[test]
    fn test_merge_tags_without_defaults() {
        let merged = DefaultConfig::default().merge_tags(&three_tags());
        assert_eq!(merged, three_tags());
    }

    #[test]
    fn test_merge_tags_no_resource_tags() {
        let merged = DefaultConfig::new(three_tags()).merge_tags(&TagSet::new());
        assert_eq!(merged, three_tags());
    }

    #[test]
    fn test_merge_tags_resource_overrides() {
        let config = DefaultConfig::new(TagSet::from_values([("key1", "value1")]));
        let tags = TagSet::from_values([("key1", "value2"), ("key2", "value2")]);

        let merged = config.merge_tags(&tags).map();
        assert_eq!(merged["key1"], "value2");
        assert_eq!(merged["key2"], "value2");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_tags_none_matching() {
        let config = DefaultConfig::new(TagSet::from_values([("key4", "value4")]));
        let merged = config.merge_tags(&three_tags());
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.key_value("key4"), Some("value4"));
    }

    #[test]
    fn test_tags_equal_missing() {
        assert!(DefaultConfig::default().tags_equal(None));
        assert!(!DefaultConfig::default().tags_equal(Some(&three_tags())));
        assert!(!DefaultConfig::new(three_tags()).tags_equal(None));
    }

    #[test]
    fn test_tags_equal_empty_against_defaults() {
        let config = DefaultConfig::new(three_tags());
        assert!(!config.tags_equal(Some(&TagSet::new())));

        let config = DefaultConfig::new(TagSet::from_values([("a", "b")]));
        assert!(!config.tags_equal(Some(&TagSet::new())));
    }

    #[test]
    fn test_tags_equal_matching() {
        let config = DefaultConfig::new(three_tags());
        assert!(config.tags_equal(Some(&three_tags())));
        assert!(DefaultConfig::new(TagSet::new()).tags_equal(Some(&TagSet::new())));
    }

    #[test]
    fn test_tags_equal_only_keys_matching() {
        let config = DefaultConfig::new(TagSet::from_values([
            ("key1", "value0"),
            ("key2", "value1"),
            ("key3", "value2"),
        ]));
        assert!(!config.tags_equal(Some(&three_tags())));
    }

    #[test]
    fn test_tags_equal_subset() {
        let config = DefaultConfig::new(TagSet::from_values([("key1", "value1")]));
        assert!(!config.tags_equal(Some(&three_tags())));
    }

    #[test]
    fn test_ignore_config_is_empty() {
        assert!(IgnoreConfig::default().is_empty());
        assert!(!IgnoreConfig::new(["key1"], Vec::<String>::new()).is_empty());
    }
}
