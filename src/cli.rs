//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tagset using the `clap` crate.
//!
//! # Commands
//!
//! - **show**: Print a tag document after applying ignore rules
//! - **diff**: Show which tags must be removed and which added or changed
//! - **merge**: Compute `tags_all` from provider defaults and resource tags
//! - **validate**: Check a nullable attribute value
//!
//! Tag documents are JSON or TOML files (chosen by extension) holding a
//! table of tag key to string value, or `null` in JSON for a key without a value.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::nullable::NullableKind;

/// Kind of nullable value to validate
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    Bool,
}

impl From<ValueKind> for NullableKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Int => Self::Int,
            ValueKind::Float => Self::Float,
            ValueKind::Bool => Self::Bool,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagset")]
#[command(about = "Inspect, diff and merge resource tag sets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the tags of a document
    #[command(visible_alias = "s")]
    Show {
        /// Tag document (JSON or TOML)
        file: PathBuf,

        /// Also hide tags with the reserved `aws:` prefix
        #[arg(long = "ignore-aws")]
        ignore_aws: bool,
    },

    /// Show tags to remove and tags to add or change between two documents
    #[command(visible_alias = "d")]
    Diff {
        /// Current tags
        old: PathBuf,

        /// Desired tags
        new: PathBuf,

        /// Group updates into batches of at most this many tags
        #[arg(long = "chunk-size", value_name = "N")]
        chunk_size: Option<usize>,
    },

    /// Merge provider default tags with the tags of a resource
    #[command(visible_alias = "m")]
    Merge {
        /// Resource tag document (JSON or TOML)
        file: PathBuf,

        /// Print only the tags that differ from the defaults instead
        #[arg(long = "remove-defaults")]
        remove_defaults: bool,
    },

    /// Validate a nullable attribute value (empty means unset)
    Validate {
        /// Raw attribute value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Kind of value expected
        #[arg(short = 'k', long = "kind", value_enum, default_value = "int")]
        kind: ValueKind,

        /// Inclusive lower bound
        #[arg(long = "min", allow_hyphen_values = true)]
        min: Option<String>,

        /// Inclusive upper bound
        #[arg(long = "max", allow_hyphen_values = true)]
        max: Option<String>,

        /// Attribute name used in messages
        #[arg(long = "key", default_value = "value")]
        key: String,
    },
}
