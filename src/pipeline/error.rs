// ABOUTME: Pipeline error types with SNAFU pattern.
// ABOUTME: Separates authentication failures from other fatal command failures.

use snafu::Snafu;

use crate::engine::{CommandKind, ExecError};

/// A fatal failure that aborted the run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PipelineError {
    #[snafu(display("Error authenticating: {source}"))]
    Authentication { source: ExecError },

    /// The underlying error is surfaced verbatim.
    #[snafu(display("{source}"))]
    Command { kind: CommandKind, source: ExecError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineErrorKind {
    /// Registry login was rejected or could not run.
    Authentication,
    /// A batch command failed.
    Command,
}

impl PipelineError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> PipelineErrorKind {
        match self {
            PipelineError::Authentication { .. } => PipelineErrorKind::Authentication,
            PipelineError::Command { .. } => PipelineErrorKind::Command,
        }
    }

    /// The command that failed.
    pub fn command_kind(&self) -> CommandKind {
        match self {
            PipelineError::Authentication { .. } => CommandKind::Login,
            PipelineError::Command { kind, .. } => *kind,
        }
    }

    /// The underlying process error.
    pub fn exec_error(&self) -> &ExecError {
        match self {
            PipelineError::Authentication { source } | PipelineError::Command { source, .. } => {
                source
            }
        }
    }
}
