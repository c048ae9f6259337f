// src/engine/mod.rs

//! Orchestration engine for globwatch.
//!
//! The engine reacts to:
//! - filtered change events from the watcher
//! - the debounce timer firing
//! - shutdown signals
//!
//! and either prints each change or runs the configured command, at most
//! once per debounce window.
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::time::Instant;

use crate::types::WatchEvent;

/// Events flowing into the runtime from the watcher, timers and signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A path accepted by the filter changed.
    Change(WatchEvent),
    /// The debounce deadline passed.
    CommandDue,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

/// What the IO shell should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreAction {
    /// Write a line to stdout.
    Print(String),
    /// A debounce timer was armed for this instant.
    ArmTimer(Instant),
    /// Run the configured command now.
    RunCommand(String),
}

/// Result of feeding one event to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    pub actions: Vec<CoreAction>,
    pub keep_running: bool,
}

impl CoreStep {
    pub fn idle() -> Self {
        Self {
            actions: Vec::new(),
            keep_running: true,
        }
    }
}

pub mod core;
pub mod runtime;

pub use self::core::CoreRuntime;
pub use runtime::Runtime;
