//! Show command - print the tags of a document

use std::path::Path;

use crate::{TagsetError, config::TagsetConfig, output, tags::TagSet};

type Result<T> = std::result::Result<T, TagsetError>;

/// Apply the configured ignore rules, and optionally drop `aws:` tags
#[must_use]
pub fn visible_tags(tags: &TagSet, config: &TagsetConfig, ignore_aws: bool) -> TagSet {
    let ignore = config.ignore_config();
    let visible = tags.ignore_config(ignore.as_ref());
    if ignore_aws { visible.ignore_aws() } else { visible }
}

/// Lines printed by the show command
#[must_use]
pub fn render(tags: &TagSet, quiet: bool) -> Vec<String> {
    if tags.is_empty() {
        return if quiet { Vec::new() } else { vec!["No tags.".to_string()] };
    }

    let mut lines: Vec<String> = output::heading("Tags:", quiet).into_iter().collect();
    lines.extend(output::tag_lines(tags, quiet));
    lines
}

/// Execute the show command
///
/// # Errors
/// Returns an error if the tag document cannot be loaded
pub fn execute(file: &Path, ignore_aws: bool, config: &TagsetConfig, quiet: bool) -> Result<()> {
    let tags = super::load_tags(file)?;
    let visible = visible_tags(&tags, config, ignore_aws);
    tracing::debug!(total = tags.len(), shown = visible.len(), "filtered tags");

    for line in render(&visible, quiet) {
        println!("{line}");
    }
    Ok(())
}
