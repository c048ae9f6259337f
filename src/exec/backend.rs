// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The runtime talks to a `CommandRunner` instead of spawning processes
//! itself. Production uses [`ShellCommandRunner`]; tests provide a runner
//! that records what it was asked to run.

use std::future::Future;
use std::pin::Pin;

use anyhow::anyhow;

use crate::errors::{GlobwatchError, Result};

use super::command::run_shell_command;

/// Trait abstracting how the change command is executed.
pub trait CommandRunner: Send {
    /// Run `command` to completion.
    ///
    /// A command that ran but failed is reported as an error; the runtime
    /// logs it and keeps watching.
    fn run<'a>(
        &'a mut self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Runs commands through `sh -c` (or `cmd /C`).
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let status = run_shell_command(command).await?;
            if status.success() {
                Ok(())
            } else {
                Err(GlobwatchError::Other(anyhow!(
                    "command '{command}' exited with {status}"
                )))
            }
        })
    }
}
