// src/engine/runtime.rs

use std::fmt;
use std::io::Write;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::CommandRunner;

use super::core::CoreRuntime;
use super::{CoreAction, CoreStep, RuntimeEvent};

/// Async IO shell around [`CoreRuntime`].
///
/// Reads events from the channel, sleeps until the deadline of the last
/// [`CoreAction::ArmTimer`], and carries out the core's actions: printing lines and running
/// the command through a [`CommandRunner`]. The command is awaited in-line,
/// so changes that arrive while it runs are handled after it finishes.
pub struct Runtime<R: CommandRunner> {
    core: CoreRuntime,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    runner: R,
    output: Box<dyn Write + Send>,
    timer: Option<Instant>,
}

impl<R: CommandRunner> fmt::Debug for Runtime<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner> Runtime<R> {
    pub fn new(core: CoreRuntime, event_rx: mpsc::Receiver<RuntimeEvent>, runner: R) -> Self {
        Self {
            core,
            event_rx,
            runner,
            output: Box::new(std::io::stdout()),
            timer: None,
        }
    }

    /// Send printed events somewhere other than stdout.
    pub fn with_output(mut self, output: Box<dyn Write + Send>) -> Self {
        self.output = output;
        self
    }

    /// Main event loop. Returns when shutdown is requested or every event
    /// sender is gone.
    pub async fn run(mut self) -> Result<()> {
        info!("globwatch runtime started");

        let step = self.core.startup(Instant::now());
        if !self.apply(step).await? {
            return Ok(());
        }

        loop {
            let event = match self.timer {
                Some(deadline) => {
                    tokio::select! {
                        maybe = self.event_rx.recv() => maybe,
                        _ = tokio::time::sleep_until(deadline.into()) => Some(RuntimeEvent::CommandDue),
                    }
                }
                None => self.event_rx.recv().await,
            };

            let Some(event) = event else {
                info!("runtime event channel closed; exiting");
                break;
            };
            debug!(?event, "runtime received event");
            if matches!(event, RuntimeEvent::CommandDue) {
                self.timer = None;
            }

            let step = self.core.step(event, Instant::now());
            if !self.apply(step).await? {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(())
    }

    /// Carry out the actions of one step. Returns `keep_running`.
    async fn apply(&mut self, step: CoreStep) -> Result<bool> {
        for action in step.actions {
            match action {
                CoreAction::Print(line) => {
                    writeln!(self.output, "{line}")?;
                    self.output.flush()?;
                }
                CoreAction::ArmTimer(deadline) => {
                    debug!(?deadline, "debounce timer armed");
                    self.timer = Some(deadline);
                }
                CoreAction::RunCommand(cmd) => {
                    if let Err(err) = self.runner.run(&cmd).await {
                        warn!(cmd = %cmd, error = %err, "command failed");
                    }
                }
            }
        }
        Ok(step.keep_running)
    }
}
