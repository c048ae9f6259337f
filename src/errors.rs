// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlobwatchError {
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid root: {0}")]
    InvalidRoot(String),

    /// A resolved pattern did not start with its own fixed prefix. This is an
    /// internal consistency failure, never a user mistake.
    #[error("resolved pattern '{resolved}' should start with '{prefix}'")]
    PrefixMismatch { resolved: String, prefix: String },

    #[error("Glob error: {0}")]
    Glob(#[from] globset::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Watch error: {0}")]
    Notify(#[from] notify::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GlobwatchError>;
