// src/exec/mod.rs

//! Command execution layer.
//!
//! - [`debounce`] holds the timer state that limits how often the command
//!   runs.
//! - [`command`] spawns the user's shell command.
//! - [`backend`] abstracts command execution behind [`CommandRunner`] so
//!   tests can swap in a recorder.

pub mod backend;
pub mod command;
pub mod debounce;

pub use backend::{CommandRunner, ShellCommandRunner};
pub use debounce::Debouncer;
