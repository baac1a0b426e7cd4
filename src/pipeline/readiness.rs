// ABOUTME: Bounded polling of the engine until it answers a status probe.
// ABOUTME: Exhausting the attempts is reported, never raised.

use crate::config::ReadinessConfig;
use crate::engine::{Executor, Invocation, Streams};

/// Outcome of waiting for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The probe succeeded on attempt `attempts`.
    Ready { attempts: u32 },
    /// Every attempt failed.
    Exhausted { attempts: u32 },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready { .. })
    }
}

/// Run `probe` until it succeeds, sleeping `policy.interval` after each
/// failed attempt, for at most `policy.attempts` attempts.
pub async fn wait_until_ready<E>(executor: &E, probe: &Invocation, policy: &ReadinessConfig) -> Readiness
where
    E: Executor + ?Sized,
{
    for attempt in 1..=policy.attempts {
        match executor.run(probe, Streams::Discard).await {
            Ok(()) => {
                tracing::debug!("engine ready after {} attempt(s)", attempt);
                return Readiness::Ready { attempts: attempt };
            }
            Err(e) => tracing::debug!("engine not ready (attempt {}): {}", attempt, e),
        }
        tokio::time::sleep(policy.interval).await;
    }

    Readiness::Exhausted {
        attempts: policy.attempts,
    }
}
