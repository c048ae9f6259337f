// src/config/validate.rs

use crate::config::model::WatchConfig;
use crate::errors::{GlobwatchError, Result};
use crate::fs::FileSystem;

/// Check a merged config and canonicalize its root.
pub fn validate_config(mut cfg: WatchConfig, fs: &dyn FileSystem) -> Result<WatchConfig> {
    validate_root(&mut cfg, fs)?;
    validate_command(&cfg)?;
    Ok(cfg)
}

fn validate_root(cfg: &mut WatchConfig, fs: &dyn FileSystem) -> Result<()> {
    if !fs.exists(&cfg.root) {
        return Err(GlobwatchError::Config(format!(
            "root {:?} does not exist",
            cfg.root
        )));
    }
    if !fs.is_dir(&cfg.root) {
        return Err(GlobwatchError::Config(format!(
            "root {:?} is not a directory",
            cfg.root
        )));
    }
    cfg.root = fs.canonicalize(&cfg.root)?;
    Ok(())
}

fn validate_command(cfg: &WatchConfig) -> Result<()> {
    if cfg.debounce.is_zero() {
        return Err(GlobwatchError::Config(
            "debounce must be >= 1ms (got 0)".to_string(),
        ));
    }

    if let Some(cmd) = &cfg.command {
        if cmd.trim().is_empty() {
            return Err(GlobwatchError::Config("command must not be empty".to_string()));
        }
    } else if cfg.initial {
        return Err(GlobwatchError::Config(
            "--initial needs a command to run (--command)".to_string(),
        ));
    }

    Ok(())
}
