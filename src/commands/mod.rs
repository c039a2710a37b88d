//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args and prints its result. The formatting half of every command is a
//! separate `render` function returning lines, so it can be tested without
//! capturing stdout.

pub mod diff;
pub mod merge;
pub mod show;
pub mod validate;

// Re-export execute functions for convenience
pub use diff::execute as diff;
pub use merge::execute as merge;
pub use show::execute as show;
pub use validate::execute as validate;

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::{TagsetError, tags::TagSet};

type Result<T> = std::result::Result<T, TagsetError>;

/// Load a tag document from disk
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON. The
/// document must be a table of tags or a list of tag keys.
///
/// # Errors
///
/// Returns `TagsetError` if the file cannot be read, cannot be parsed, or
/// does not hold a table or list.
pub fn load_tags(path: &Path) -> Result<TagSet> {
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let document: Value = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    if !(document.is_object() || document.is_array()) {
        return Err(TagsetError::InvalidInput(format!(
            "{}: expected a table of tags or a list of keys",
            path.display()
        )));
    }

    for key in non_string_members(&document) {
        tracing::warn!(path = %path.display(), key, "tag value is not a string, keeping the key without a value");
    }

    let tags = TagSet::from_json(&document);
    tracing::debug!(path = %path.display(), count = tags.len(), "loaded tag document");
    Ok(tags)
}

/// Keys of a tag table whose value is neither a string nor null
///
/// Such values, e.g. TOML numbers or datetimes, are not tag values and end up
/// as keys without one.
#[must_use]
pub fn non_string_members(document: &Value) -> Vec<&str> {
    let Some(map) = document.as_object() else {
        return Vec::new();
    };
    let mut keys: Vec<&str> = map
        .iter()
        .filter(|(_, v)| !(v.is_string() || v.is_null()))
        .map(|(k, _)| k.as_str())
        .collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_object() {
        let file = write_temp(".json", r#"{"env": "prod", "empty": null}"#);
        let tags = load_tags(file.path()).unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags.key_value("env"), Some("prod"));
        assert!(tags.key_exists("empty"));
        assert_eq!(tags.key_value("empty"), None);
    }

    #[test]
    fn test_load_json_array() {
        let file = write_temp(".json", r#"["a", "b"]"#);
        let tags = load_tags(file.path()).unwrap();
        assert!(tags.key_exists("a"));
        assert!(tags.key_exists("b"));
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(".toml", "env = \"prod\"\nowner = \"core\"\n");
        let tags = load_tags(file.path()).unwrap();
        assert_eq!(tags.key_value("owner"), Some("core"));
    }

    #[test]
    fn test_load_toml_non_string_values() {
        let file = write_temp(".toml", "env = \"prod\"\nreplicas = 3\ncreated = 1979-05-27T07:32:00Z\n");
        let tags = load_tags(file.path()).unwrap();

        assert_eq!(tags.len(), 3);
        assert_eq!(tags.key_value("env"), Some("prod"));
        assert!(tags.key_exists("replicas"));
        assert_eq!(tags.key_value("replicas"), None);
        assert_eq!(tags.key_value("created"), None);
    }

    #[test]
    fn test_non_string_members() {
        let document = serde_json::json!({"a": "x", "b": 1, "c": null, "d": true, "e": ["y"]});
        assert_eq!(non_string_members(&document), vec!["b", "d", "e"]);
        assert!(non_string_members(&serde_json::json!(["a", 1])).is_empty());
    }

    #[test]
    fn test_load_scalar_is_invalid() {
        let file = write_temp(".json", "42");
        let err = load_tags(file.path()).unwrap_err();
        assert!(matches!(err, TagsetError::InvalidInput(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_temp(".json", "{");
        assert!(matches!(load_tags(file.path()), Err(TagsetError::JsonError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tags(Path::new("/nonexistent/tags.json")).unwrap_err();
        assert!(matches!(err, TagsetError::IoError(_)));
    }
}
