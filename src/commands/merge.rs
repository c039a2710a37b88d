//! Merge command - combine provider default tags with resource tags

use std::path::Path;

use crate::{TagsetError, config::TagsetConfig, output, tags::TagSet};

type Result<T> = std::result::Result<T, TagsetError>;

/// Tags to print for a resource
///
/// By default this is every tag the resource ends up with, defaults first
/// and resource tags winning. With `remove_defaults` it is the inverse: the
/// resource tags that are not inherited unchanged from the defaults.
#[must_use]
pub fn merged_tags(tags: &TagSet, config: &TagsetConfig, remove_defaults: bool) -> TagSet {
    let defaults = config.default_config();
    let ignore = config.ignore_config();

    if remove_defaults {
        tags.remove_default_config(Some(&defaults))
            .ignore_config(ignore.as_ref())
    } else {
        defaults.merge_tags(tags).ignore_config(ignore.as_ref())
    }
}

/// Execute the merge command
///
/// # Errors
/// Returns an error if the tag document cannot be loaded
pub fn execute(file: &Path, remove_defaults: bool, config: &TagsetConfig, quiet: bool) -> Result<()> {
    let tags = super::load_tags(file)?;
    let result = merged_tags(&tags, config, remove_defaults);

    if !quiet && config.default_config().tags_equal(Some(&tags)) {
        println!("Resource tags match the default tags.");
    }
    for line in output::tag_lines(&result, quiet) {
        println!("{line}");
    }
    Ok(())
}
