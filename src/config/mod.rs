// src/config/mod.rs

//! Configuration loading and validation for globwatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the resolved [`WatchConfig`]
//!   (`model.rs`).
//! - Load an optional config file and merge it with CLI flags (`loader.rs`).
//! - Validate the merged result and pin the root down (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve};
pub use model::{CommandSection, ConfigFile, WatchConfig, WatchSection, DEFAULT_DEBOUNCE_MS};
pub use validate::validate_config;
