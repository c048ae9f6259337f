// src/exec/command.rs

use std::process::{ExitStatus, Stdio};

use anyhow::Context;
use tokio::process::Command;
use tracing::info;

use crate::errors::Result;

/// Build a shell command appropriate for the platform.
pub fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    }
}

/// Run `cmd` through the shell with inherited stdio and wait for it.
pub async fn run_shell_command(cmd: &str) -> Result<ExitStatus> {
    info!(cmd = %cmd, "running command");

    let mut child = shell_command(cmd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning command '{cmd}'"))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for command '{cmd}'"))?;

    info!(
        cmd = %cmd,
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "command exited"
    );
    Ok(status)
}
