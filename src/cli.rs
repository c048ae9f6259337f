// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `globwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "globwatch",
    version,
    about = "Watch files matching globs; print changes or run a command.",
    long_about = "Command-line file watcher. Globs are resolved relative to the \
                  current working directory (or --root). Runs --command on change \
                  if given, otherwise prints matched changes as <kind>:<path>.\n\n\
                  Quote your globs (\"src/**/*.rs\") so the shell does not expand \
                  them. `**.ext` is accepted as shorthand for `**/*.ext`. With no \
                  globs, every file under the root is watched."
)]
pub struct CliArgs {
    /// Glob patterns to watch, relative to the root.
    #[arg(value_name = "GLOB")]
    pub globs: Vec<String>,

    /// Command to run on change (use quotes).
    #[arg(short, long, value_name = "CMD")]
    pub command: Option<String>,

    /// Run the command at most once per this many milliseconds.
    ///
    /// Default: 400.
    #[arg(short, long, value_name = "MS")]
    pub debounce: Option<u64>,

    /// Run the command once at startup.
    #[arg(short, long)]
    pub initial: bool,

    /// Root path to resolve globs against (default: current directory).
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Also report changes to dotfiles and dot-directories.
    #[arg(long)]
    pub dotfiles: bool,

    /// Delay change detection by this many milliseconds, coalescing events.
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Optional TOML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GLOBWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve globs, print the watch root and patterns, and exit.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags_and_globs() {
        let args = CliArgs::try_parse_from([
            "globwatch", "-c", "make", "-d", "100", "-i", "-r", "/tmp", "src/**/*.rs", "**.md",
        ])
        .unwrap();
        assert_eq!(args.command.as_deref(), Some("make"));
        assert_eq!(args.debounce, Some(100));
        assert!(args.initial);
        assert_eq!(args.root, Some(PathBuf::from("/tmp")));
        assert_eq!(args.globs, vec!["src/**/*.rs", "**.md"]);
    }

    #[test]
    fn no_globs_is_fine() {
        let args = CliArgs::try_parse_from(["globwatch"]).unwrap();
        assert!(args.globs.is_empty());
        assert!(!args.dotfiles);
    }
}
