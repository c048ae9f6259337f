// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Debounce window used when neither the CLI nor the file sets one.
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// globs = ["src/**/*.rs", "**.toml"]
/// root = "."
/// dotfiles = false
/// delay_ms = 50
///
/// [command]
/// run = "cargo test"
/// debounce_ms = 400
/// initial = true
/// ```
///
/// All sections and keys are optional; CLI flags take precedence.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub watch: WatchSection,

    #[serde(default)]
    pub command: CommandSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WatchSection {
    /// Patterns used when none are given on the command line.
    #[serde(default)]
    pub globs: Vec<String>,

    /// Root to resolve globs against. Relative roots are taken relative to
    /// the config file's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub dotfiles: Option<bool>,

    #[serde(default)]
    pub delay_ms: Option<u64>,
}

/// `[command]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CommandSection {
    /// Shell command to run on change.
    #[serde(default)]
    pub run: Option<String>,

    #[serde(default)]
    pub debounce_ms: Option<u64>,

    #[serde(default)]
    pub initial: Option<bool>,
}

/// Fully merged run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    pub globs: Vec<String>,
    /// Absolute; canonical once validated.
    pub root: PathBuf,
    pub command: Option<String>,
    pub debounce: Duration,
    pub initial: bool,
    pub dotfiles: bool,
    pub delay: Option<Duration>,
}
