// src/config/loader.rs

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, WatchConfig, DEFAULT_DEBOUNCE_MS};
use crate::config::validate::validate_config;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; it does **not** merge with CLI
/// flags or validate anything.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Merge CLI flags over an optional config file.
///
/// - Non-empty CLI globs replace the file's globs.
/// - Scalar CLI values win over file values; boolean flags are OR-ed.
/// - A CLI root is relative to `cwd`; a file root is relative to
///   `config_dir`.
///
/// No filesystem access; the root is joined but not canonicalized.
pub fn resolve(
    args: &CliArgs,
    file: Option<&ConfigFile>,
    config_dir: Option<&Path>,
    cwd: &Path,
) -> WatchConfig {
    let defaults = ConfigFile::default();
    let file = file.unwrap_or(&defaults);

    let globs = if args.globs.is_empty() {
        file.watch.globs.clone()
    } else {
        args.globs.clone()
    };

    let root = match (&args.root, &file.watch.root) {
        (Some(cli_root), _) => cwd.join(cli_root),
        (None, Some(file_root)) => config_dir.unwrap_or(cwd).join(file_root),
        (None, None) => cwd.to_path_buf(),
    };

    let debounce_ms = args
        .debounce
        .or(file.command.debounce_ms)
        .unwrap_or(DEFAULT_DEBOUNCE_MS);

    let delay = args
        .delay
        .or(file.watch.delay_ms)
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis);

    WatchConfig {
        globs,
        root,
        command: args.command.clone().or_else(|| file.command.run.clone()),
        debounce: Duration::from_millis(debounce_ms),
        initial: args.initial || file.command.initial.unwrap_or(false),
        dotfiles: args.dotfiles || file.watch.dotfiles.unwrap_or(false),
        delay,
    }
}

/// Load the optional config file named by `--config`, merge it with the CLI
/// flags and validate the result.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(args: &CliArgs, cwd: &Path, fs: &dyn FileSystem) -> Result<WatchConfig> {
    let cfg = match &args.config {
        Some(path) => {
            let path = cwd.join(path);
            let file = load_from_path(&path)?;
            resolve(args, Some(&file), path.parent(), cwd)
        }
        None => resolve(args, None, None, cwd),
    };
    validate_config(cfg, fs)
}
