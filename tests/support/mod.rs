// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted in-memory executor that records every call.

use async_trait::async_trait;
use republish::engine::{CommandKind, ExecError, Executor, Invocation, Streams};
use std::sync::Mutex;

/// One recorded executor call.
#[derive(Debug, Clone)]
pub struct Call {
    pub kind: CommandKind,
    pub line: String,
    pub stdin: Option<String>,
    pub streams: Streams,
    pub detached: bool,
}

impl Call {
    /// A command run from the batch, with streams passed through.
    pub fn is_batch(&self) -> bool {
        !self.detached && self.streams == Streams::Inherit
    }
}

/// Executor that never starts a process.
///
/// Readiness probes (info with discarded output) fail for the first
/// `probe_failures` calls; commands whose kind is in `failing` always fail.
#[derive(Default)]
pub struct FakeExecutor {
    calls: Mutex<Vec<Call>>,
    failing: Vec<CommandKind>,
    probe_failures: usize,
    spawn_fails: bool,
}

// Each test binary only uses some of these helpers, so allow dead_code.
#[allow(dead_code)]
impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, kind: CommandKind) -> Self {
        self.failing.push(kind);
        self
    }

    pub fn probe_failures(mut self, count: usize) -> Self {
        self.probe_failures = count;
        self
    }

    pub fn never_ready(self) -> Self {
        self.probe_failures(usize::MAX)
    }

    pub fn spawn_fails(mut self) -> Self {
        self.spawn_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Trace-style lines of the batch commands, in execution order.
    pub fn batch_lines(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(Call::is_batch)
            .map(|c| c.line)
            .collect()
    }

    pub fn count(&self, kind: CommandKind) -> usize {
        self.calls().iter().filter(|c| c.kind == kind).count()
    }

    fn record(&self, invocation: &Invocation, streams: Streams, detached: bool) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(Call {
            kind: invocation.kind(),
            line: invocation.to_string(),
            stdin: invocation.stdin().map(str::to_string),
            streams,
            detached,
        });
        calls
            .iter()
            .filter(|c| c.kind == CommandKind::InfoProbe && c.streams == Streams::Discard)
            .count()
    }
}

fn failure(invocation: &Invocation) -> ExecError {
    ExecError::Exited {
        program: invocation.program().to_string(),
        code: 1,
    }
}

#[async_trait]
impl Executor for FakeExecutor {
    async fn run(&self, invocation: &Invocation, streams: Streams) -> Result<(), ExecError> {
        let probes = self.record(invocation, streams, false);

        let is_probe = invocation.kind() == CommandKind::InfoProbe && streams == Streams::Discard;
        if is_probe && probes <= self.probe_failures {
            return Err(failure(invocation));
        }
        if self.failing.contains(&invocation.kind()) {
            return Err(failure(invocation));
        }
        Ok(())
    }

    fn spawn_detached(&self, invocation: &Invocation, streams: Streams) -> Result<(), ExecError> {
        self.record(invocation, streams, true);
        if self.spawn_fails {
            return Err(ExecError::Io {
                program: invocation.program().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(())
    }
}
