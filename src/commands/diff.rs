//! Diff command - tags to remove and tags to add or change
//!
//! Both documents are filtered with the configured ignore rules and the
//! reserved `aws:` prefix first, since those tags are never managed here.

use std::path::Path;

use crate::{TagsetError, config::TagsetConfig, output, tags::TagSet};

type Result<T> = std::result::Result<T, TagsetError>;

/// Tags to remove and tags to add or update, going from `old` to `new`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    pub removed: TagSet,
    pub updated: TagSet,
}

impl TagDiff {
    /// Compute the diff after dropping ignored and reserved tags
    #[must_use]
    pub fn compute(old: &TagSet, new: &TagSet, config: &TagsetConfig) -> Self {
        let ignore = config.ignore_config();
        let old = old.ignore_config(ignore.as_ref()).ignore_aws();
        let new = new.ignore_config(ignore.as_ref()).ignore_aws();

        Self {
            removed: old.removed(&new),
            updated: old.updated(&new),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Lines printed by the diff command
///
/// With a chunk size, updates are listed in numbered batches the way they
/// would be sent to an API with a per-call tag limit.
#[must_use]
pub fn render(diff: &TagDiff, chunk_size: Option<usize>, quiet: bool) -> Vec<String> {
    if diff.is_empty() {
        return if quiet { Vec::new() } else { vec!["No changes.".to_string()] };
    }

    let mut lines = Vec::new();

    let mut removed = diff.removed.keys();
    removed.sort_unstable();
    lines.extend(removed.into_iter().map(|key| output::removed_line(key, quiet)));

    let batches = match chunk_size {
        Some(size) => diff.updated.chunks(size),
        None if diff.updated.is_empty() => Vec::new(),
        None => vec![diff.updated.clone()],
    };
    let numbered = batches.len() > 1 || chunk_size.is_some();

    for (i, batch) in batches.iter().enumerate() {
        if numbered {
            lines.extend(output::heading(&format!("Batch {}:", i + 1), quiet));
        }
        let mut keys = batch.keys();
        keys.sort_unstable();
        lines.extend(
            keys.into_iter()
                .map(|key| output::updated_line(key, batch.key_value(key), quiet)),
        );
    }

    lines
}

/// Execute the diff command
///
/// # Errors
/// Returns an error if either tag document cannot be loaded
pub fn execute(
    old: &Path,
    new: &Path,
    chunk_size: Option<usize>,
    config: &TagsetConfig,
    quiet: bool,
) -> Result<()> {
    let old_tags = super::load_tags(old)?;
    let new_tags = super::load_tags(new)?;
    let diff = TagDiff::compute(&old_tags, &new_tags, config);
    tracing::debug!(
        removed = diff.removed.len(),
        updated = diff.updated.len(),
        "computed tag diff"
    );

    for line in render(&diff, chunk_size, quiet) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TagDiff {
        let old = TagSet::from_values([
            ("aws:cloudformation:stack-id", "x"),
            ("gone", "1"),
            ("same", "2"),
            ("changed", "3"),
        ]);
        let new = TagSet::from_values([("same", "2"), ("changed", "4"), ("added", "5")]);
        TagDiff::compute(&old, &new, &TagsetConfig::default())
    }

    #[test]
    fn test_compute() {
        let diff = sample();
        assert_eq!(diff.removed.keys(), vec!["gone"]);

        let mut updated = diff.updated.keys();
        updated.sort_unstable();
        assert_eq!(updated, vec!["added", "changed"]);
        assert_eq!(diff.updated.key_value("changed"), Some("4"));
    }

    #[test]
    fn test_compute_respects_ignore_config() {
        let config = TagsetConfig::from_toml_str("[ignore_tags]\nkeys = [\"gone\"]\n").unwrap();
        let old = TagSet::from_values([("gone", "1")]);
        let diff = TagDiff::compute(&old, &TagSet::new(), &config);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_render_quiet() {
        assert_eq!(
            render(&sample(), None, true),
            vec!["- gone", "+ added = 5", "+ changed = 4"]
        );
    }

    #[test]
    fn test_render_chunked() {
        let lines = render(&sample(), Some(1), false);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Batch 1:"));
        assert!(lines[3].contains("Batch 2:"));
    }

    #[test]
    fn test_render_no_changes() {
        assert_eq!(render(&TagDiff::default(), None, false), vec!["No changes."]);
        assert!(render(&TagDiff::default(), Some(2), true).is_empty());
    }
}
