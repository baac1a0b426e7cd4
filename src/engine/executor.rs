// ABOUTME: Executor trait and the child-process implementation behind it.
// ABOUTME: Runs invocations to completion or launches them in the background.

use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::invocation::{Invocation, Streams};

/// Runs invocations. The pipeline only talks to the engine through this.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run to completion. Any non-zero exit is an error.
    async fn run(&self, invocation: &Invocation, streams: Streams) -> Result<(), ExecError>;

    /// Start without waiting. Only a failure to launch is reported.
    ///
    /// Must be called from within a tokio runtime.
    fn spawn_detached(&self, invocation: &Invocation, streams: Streams) -> Result<(), ExecError>;
}

/// Errors from running an external process.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write standard input of {program}: {source}")]
    Stdin {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {code}")]
    Exited { program: String, code: i32 },

    #[error("{program} was terminated by a signal")]
    Terminated { program: String },
}

impl ExecError {
    /// The exit code, when the process ran and exited on its own.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::Exited { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Runs invocations as local child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

fn command_for(invocation: &Invocation, streams: Streams) -> Command {
    let mut command = Command::new(invocation.program());
    command.args(invocation.args());

    command.stdin(if invocation.stdin().is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    match streams {
        Streams::Inherit => {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }
        Streams::Discard => {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
    }

    command
}

fn check_status(program: &str, status: ExitStatus) -> Result<(), ExecError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ExecError::Exited {
            program: program.to_string(),
            code,
        }),
        None => Err(ExecError::Terminated {
            program: program.to_string(),
        }),
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn run(&self, invocation: &Invocation, streams: Streams) -> Result<(), ExecError> {
        let program = invocation.program();
        let io_error = |source| ExecError::Io {
            program: program.to_string(),
            source,
        };

        let mut child = command_for(invocation, streams).spawn().map_err(io_error)?;

        // Close stdin before waiting so the child sees EOF
        let mut stdin_result = Ok(());
        if let (Some(payload), Some(mut stdin)) = (invocation.stdin(), child.stdin.take()) {
            stdin_result = stdin.write_all(payload.as_bytes()).await;
        }

        let status = child.wait().await.map_err(io_error)?;

        // A child that exits early breaks the pipe; its status is the real cause
        check_status(program, status)?;
        stdin_result.map_err(|source| ExecError::Stdin {
            program: program.to_string(),
            source,
        })
    }

    fn spawn_detached(&self, invocation: &Invocation, streams: Streams) -> Result<(), ExecError> {
        let program = invocation.program().to_string();
        let mut child = command_for(invocation, streams)
            .spawn()
            .map_err(|source| ExecError::Io {
                program: program.clone(),
                source,
            })?;

        // Reap the child when it exits; nobody waits on this task
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => tracing::debug!("background process {} exited: {}", program, status),
                Err(e) => tracing::warn!("failed to wait on background process {}: {}", program, e),
            }
        });

        Ok(())
    }
}
