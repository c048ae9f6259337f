mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tempfile::tempdir;

use globwatch::cli::CliArgs;
use globwatch::config::{load_and_validate, load_from_path, resolve, DEFAULT_DEBOUNCE_MS};
use globwatch::fs::RealFileSystem;

type TestResult = Result<(), Box<dyn Error>>;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["globwatch"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn defaults_without_file() {
    let cfg = resolve(&args(&[]), None, None, &PathBuf::from("/cwd"));
    assert!(cfg.globs.is_empty());
    assert_eq!(cfg.root, PathBuf::from("/cwd"));
    assert_eq!(cfg.command, None);
    assert_eq!(cfg.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
    assert!(!cfg.initial);
    assert!(!cfg.dotfiles);
    assert_eq!(cfg.delay, None);
}

#[test]
fn file_values_fill_in_and_cli_wins() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let path = dir.path().join("globwatch.toml");
    fs::write(
        &path,
        r#"
[watch]
globs = ["src/**/*.rs"]
root = "project"
dotfiles = true
delay_ms = 25

[command]
run = "cargo test"
debounce_ms = 250
initial = true
"#,
    )?;

    let file = load_from_path(&path)?;

    let from_file = resolve(&args(&[]), Some(&file), Some(dir.path()), &PathBuf::from("/cwd"));
    assert_eq!(from_file.globs, vec!["src/**/*.rs"]);
    assert_eq!(from_file.root, dir.path().join("project"));
    assert_eq!(from_file.command.as_deref(), Some("cargo test"));
    assert_eq!(from_file.debounce, Duration::from_millis(250));
    assert!(from_file.initial);
    assert!(from_file.dotfiles);
    assert_eq!(from_file.delay, Some(Duration::from_millis(25)));

    let overridden = resolve(
        &args(&["-c", "make", "-d", "10", "-r", "elsewhere", "--delay", "0", "*.md"]),
        Some(&file),
        Some(dir.path()),
        &PathBuf::from("/cwd"),
    );
    assert_eq!(overridden.globs, vec!["*.md"]);
    assert_eq!(overridden.root, PathBuf::from("/cwd/elsewhere"));
    assert_eq!(overridden.command.as_deref(), Some("make"));
    assert_eq!(overridden.debounce, Duration::from_millis(10));
    assert_eq!(overridden.delay, None);
    Ok(())
}

#[test]
fn load_and_validate_reads_config_and_canonicalizes_root() -> TestResult {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("src"))?;
    fs::write(dir.path().join("globwatch.toml"), "[watch]\nroot = \"src\"\n")?;

    let cfg = load_and_validate(
        &args(&["--config", "globwatch.toml", "*.rs"]),
        dir.path(),
        &RealFileSystem,
    )?;
    assert_eq!(cfg.root, dir.path().join("src").canonicalize()?);
    assert_eq!(cfg.globs, vec!["*.rs"]);
    Ok(())
}

#[test]
fn missing_root_fails_validation() -> TestResult {
    let dir = tempdir()?;
    let err = load_and_validate(&args(&["-r", "missing"]), dir.path(), &RealFileSystem)
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{err}");
    Ok(())
}

#[test]
fn malformed_toml_is_reported() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[watch\nglobs = 1")?;
    assert!(load_from_path(&path).is_err());
    Ok(())
}

#[test]
fn wrong_value_type_is_reported() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[command]\ndebounce_ms = \"fast\"\n")?;
    assert!(load_from_path(&path).is_err());
    Ok(())
}
