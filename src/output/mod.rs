//! Output formatting for CLI display
//!
//! This module provides utilities for formatting tags and tag diffs in the
//! CLI. Quiet mode drops decoration and color so output can be piped.

use colored::Colorize;

use crate::tags::TagSet;

/// Format a single tag as `key = value`, or just `key` when it has no value
#[must_use]
pub fn tag_line(key: &str, value: Option<&str>, quiet: bool) -> String {
    let body = match value {
        Some(v) => format!("{key} = {v}"),
        None => key.to_string(),
    };
    if quiet { body } else { format!("  {body}") }
}

/// Format every tag of a set, sorted by key
#[must_use]
pub fn tag_lines(tags: &TagSet, quiet: bool) -> Vec<String> {
    let mut keys = tags.keys();
    keys.sort_unstable();
    keys.into_iter()
        .map(|key| tag_line(key, tags.key_value(key), quiet))
        .collect()
}

/// Format a tag that will be removed
#[must_use]
pub fn removed_line(key: &str, quiet: bool) -> String {
    let line = format!("- {key}");
    if quiet { line } else { line.red().to_string() }
}

/// Format a tag that will be added or changed
#[must_use]
pub fn updated_line(key: &str, value: Option<&str>, quiet: bool) -> String {
    let line = match value {
        Some(v) => format!("+ {key} = {v}"),
        None => format!("+ {key}"),
    };
    if quiet { line } else { line.green().to_string() }
}

/// Format a section heading; omitted entirely in quiet mode
#[must_use]
pub fn heading(text: &str, quiet: bool) -> Option<String> {
    (!quiet).then(|| text.bold().to_string())
}
