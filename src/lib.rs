// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod filter;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{load_and_validate, WatchConfig};
use crate::engine::{CoreRuntime, Runtime, RuntimeEvent};
use crate::exec::ShellCommandRunner;
use crate::filter::WatchFilter;
use crate::fs::RealFileSystem;
use crate::watch::{spawn_watcher, WatcherOptions};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (CLI + optional TOML file)
/// - glob resolution into a watch root and path filter
/// - the file watcher
/// - the runtime that prints changes or runs the debounced command
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let cfg = load_and_validate(&args, &cwd, &RealFileSystem)?;

    let filter = filter::build(cfg.globs.as_slice(), &cfg.root)?;

    if args.dry_run {
        print_dry_run(&cfg, &filter);
        return Ok(());
    }

    let filter = Arc::new(filter);
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let options = WatcherOptions {
        dotfiles: cfg.dotfiles,
        delay: cfg.delay,
    };
    let watcher_handle = spawn_watcher(Arc::clone(&filter), options, rt_tx.clone()).await?;

    info!(
        "watching {} under {:?} ...",
        describe_globs(&cfg.globs),
        watcher_handle.root()
    );

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let core = CoreRuntime::from_config(&cfg);
    let runtime = Runtime::new(core, rt_rx, ShellCommandRunner);
    runtime.run().await?;

    drop(watcher_handle);
    Ok(())
}

fn describe_globs(globs: &[String]) -> String {
    if globs.is_empty() {
        return "\".\"".to_string();
    }
    globs
        .iter()
        .map(|g| format!("{g:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print what would be watched, without watching.
fn print_dry_run(cfg: &WatchConfig, filter: &WatchFilter) {
    println!("globwatch dry-run");
    println!("  root = {:?}", cfg.root);
    println!("  watch root = {:?}", filter.root());
    match filter.matcher() {
        None => println!("  filter: everything"),
        Some(m) => {
            println!("  patterns:");
            for p in m.extended_patterns() {
                println!("    - {p}");
            }
            println!("  directories:");
            for d in m.directory_set() {
                println!("    - {d}");
            }
        }
    }
    if let Some(cmd) = &cfg.command {
        println!("  command = {cmd}");
        println!("  debounce = {}ms", cfg.debounce.as_millis());
        println!("  initial = {}", cfg.initial);
    }
    println!("  dotfiles = {}", cfg.dotfiles);
    if let Some(delay) = cfg.delay {
        println!("  delay = {}ms", delay.as_millis());
    }
}
