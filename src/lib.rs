//! Tagset - Key/value resource tags with set algebra
//!
//! This library provides the tag handling shared by cloud resource
//! definitions: building tag sets from loosely typed input, filtering out
//! service-managed and user-ignored tags, merging provider default tags, and
//! diffing desired against actual tags to decide what to add or remove.
//! It also provides string-encoded nullable numbers and their validators.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod nullable;
pub mod output;
pub mod tags;

pub use tags::{DefaultConfig, IgnoreConfig, TagData, TagSet};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagsetError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON tag document could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// TOML tag document could not be parsed
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
    /// A nullable value could not be parsed
    #[error("{0}")]
    NullableError(#[from] nullable::NullableError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A value failed validation
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
