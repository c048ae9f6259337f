// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! This module contains a synchronous, deterministic "core runtime" that
//! consumes [`RuntimeEvent`]s and produces a list of [`CoreAction`]s
//! describing what the IO shell should do next.
//!
//! Time is passed in explicitly so the core can be unit tested without
//! Tokio, channels, or processes.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::WatchConfig;
use crate::engine::{CoreAction, CoreStep, RuntimeEvent};
use crate::exec::Debouncer;

#[derive(Debug)]
pub struct CoreRuntime {
    command: Option<String>,
    debouncer: Debouncer,
    initial: bool,
}

impl CoreRuntime {
    pub fn new(command: Option<String>, debounce: Duration, initial: bool) -> Self {
        Self {
            command,
            debouncer: Debouncer::new(debounce),
            initial,
        }
    }

    pub fn from_config(cfg: &WatchConfig) -> Self {
        Self::new(cfg.command.clone(), cfg.debounce, cfg.initial)
    }

    /// Pending debounce deadline, if a command run is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Actions to take before the first event: the optional initial run.
    pub fn startup(&mut self, now: Instant) -> CoreStep {
        if self.initial && self.command.is_some() {
            return self.request_command(now);
        }
        CoreStep::idle()
    }

    /// Handle a single runtime event.
    pub fn step(&mut self, event: RuntimeEvent, now: Instant) -> CoreStep {
        match event {
            RuntimeEvent::Change(change) => {
                if self.command.is_some() {
                    debug!(%change, "change requests command");
                    self.request_command(now)
                } else {
                    CoreStep {
                        actions: vec![CoreAction::Print(change.to_string())],
                        keep_running: true,
                    }
                }
            }
            RuntimeEvent::CommandDue => {
                let mut step = CoreStep::idle();
                if self.debouncer.fire() {
                    if let Some(cmd) = &self.command {
                        step.actions.push(CoreAction::RunCommand(cmd.clone()));
                    }
                }
                step
            }
            RuntimeEvent::ShutdownRequested => CoreStep {
                actions: Vec::new(),
                keep_running: false,
            },
        }
    }

    fn request_command(&mut self, now: Instant) -> CoreStep {
        let mut step = CoreStep::idle();
        if let Some(deadline) = self.debouncer.request(now) {
            step.actions.push(CoreAction::ArmTimer(deadline));
        }
        step
    }
}
