#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use globwatch::config::{WatchConfig, DEFAULT_DEBOUNCE_MS};

/// Builder for `WatchConfig` to simplify test setup.
pub struct WatchConfigBuilder {
    config: WatchConfig,
}

impl WatchConfigBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: WatchConfig {
                globs: Vec::new(),
                root: root.into(),
                command: None,
                debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
                initial: false,
                dotfiles: false,
                delay: None,
            },
        }
    }

    pub fn glob(mut self, pattern: &str) -> Self {
        self.config.globs.push(pattern.to_string());
        self
    }

    pub fn command(mut self, cmd: &str) -> Self {
        self.config.command = Some(cmd.to_string());
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.debounce = Duration::from_millis(ms);
        self
    }

    pub fn initial(mut self, val: bool) -> Self {
        self.config.initial = val;
        self
    }

    pub fn dotfiles(mut self, val: bool) -> Self {
        self.config.dotfiles = val;
        self
    }

    pub fn build(self) -> WatchConfig {
        self.config
    }
}
