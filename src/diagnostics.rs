// ABOUTME: Diagnostics accumulator for non-fatal events during a run.
// ABOUTME: Collects warnings that shouldn't fail the run but should be reported.

/// Collects non-fatal warnings during a pipeline run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }
}

/// A non-fatal warning collected during a run.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a cache-pull miss warning.
    pub fn cache_pull_miss(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::CachePullMiss,
            message: message.into(),
        }
    }

    /// Create a daemon-not-ready warning.
    pub fn daemon_not_ready(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DaemonNotReady,
            message: message.into(),
        }
    }

    /// Create a daemon start warning.
    pub fn daemon_start(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DaemonStart,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A cache-source image could not be pulled.
    CachePullMiss,
    /// The engine never answered the readiness probe.
    DaemonNotReady,
    /// The daemon process could not be launched.
    DaemonStart,
}
