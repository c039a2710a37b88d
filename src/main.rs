//! Tagset CLI application entry point
//!
//! Inspects resource tag documents the way a cloud provider would before
//! applying them: filtering ignored tags, merging provider default tags, and
//! computing which tags to remove and which to add or change.
//!
//! # Usage
//!
//! ```bash
//! # Print tags, hiding ignored and reserved `aws:` tags
//! tagset show tags.json --ignore-aws
//!
//! # What changes going from current.json to desired.toml, 50 tags per call
//! tagset diff current.json desired.toml --chunk-size 50
//!
//! # Full tag set including provider defaults
//! tagset merge tags.toml
//!
//! # Check a nullable number
//! tagset validate 42 --kind int --min 1 --max 100
//!
//! # Quiet mode (only output results)
//! tagset -q diff a.json b.json
//! ```
//!
//! # Configuration
//!
//! Default tags and ignore rules are read from the user's config directory
//! (`~/.config/tagset/config.toml` on Linux), or from `--config <PATH>`.
//! Set `RUST_LOG=debug` for diagnostic logging on stderr.

use tagset::{
    TagsetError,
    cli::{Cli, Commands},
    commands,
    config::TagsetConfig,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, TagsetError>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => TagsetConfig::load_from(path)?,
        None => TagsetConfig::load()?,
    };

    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Show { file, ignore_aws } => {
            commands::show(file, *ignore_aws, &config, quiet)?;
        }
        Commands::Diff { old, new, chunk_size } => {
            commands::diff(old, new, *chunk_size, &config, quiet)?;
        }
        Commands::Merge { file, remove_defaults } => {
            commands::merge(file, *remove_defaults, &config, quiet)?;
        }
        Commands::Validate { value, kind, min, max, key } => {
            commands::validate(value, *kind, min.as_deref(), max.as_deref(), key, quiet)?;
        }
    }

    Ok(())
}
