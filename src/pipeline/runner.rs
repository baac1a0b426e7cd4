// ABOUTME: Executes one republish run from daemon start to the last batch command.
// ABOUTME: Strictly sequential; only cache-pull failures are tolerated.

use snafu::ResultExt;

use super::error::{AuthenticationSnafu, CommandSnafu, PipelineError};
use super::plan::{batch, login_step};
use super::readiness::{Readiness, wait_until_ready};
use crate::config::RunConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::engine::{Engine, Executor, Streams};
use crate::output::Output;

/// One pipeline run over a config, an executor and an output sink.
pub struct Pipeline<'a, E: Executor + ?Sized> {
    config: &'a RunConfig,
    engine: Engine,
    executor: &'a E,
    output: &'a Output,
}

impl<'a, E: Executor + ?Sized> Pipeline<'a, E> {
    pub fn new(config: &'a RunConfig, executor: &'a E, output: &'a Output) -> Self {
        Self {
            config,
            engine: Engine::new(&config.engine),
            executor,
            output,
        }
    }

    /// Run to completion or to the first fatal failure.
    ///
    /// Returns the non-fatal warnings collected along the way.
    pub async fn run(&self) -> Result<Diagnostics, PipelineError> {
        let mut diag = Diagnostics::default();

        if !self.config.daemon.disabled {
            self.start_daemon(&mut diag);
        }

        let probe = self.engine.info();
        if let Readiness::Exhausted { attempts } =
            wait_until_ready(self.executor, &probe, &self.config.readiness).await
        {
            diag.warn(Warning::daemon_not_ready(format!(
                "engine did not answer after {} attempts, continuing",
                attempts
            )));
        }

        self.login().await?;

        for invocation in batch(&self.engine, self.config) {
            self.output.trace(&invocation);

            match self.executor.run(&invocation, Streams::Inherit).await {
                Ok(()) => tracing::debug!("{} succeeded", invocation.kind()),
                Err(e) if invocation.kind().is_recoverable() => {
                    let image = invocation.image().unwrap_or_default();
                    self.output.recovered(&format!(
                        "Could not pull cache-from image {}. Ignoring...",
                        image
                    ));
                    diag.warn(Warning::cache_pull_miss(format!(
                        "cache-from image {} not pulled: {}",
                        image, e
                    )));
                }
                Err(e) => {
                    return Err(e).context(CommandSnafu {
                        kind: invocation.kind(),
                    });
                }
            }
        }

        tracing::info!("republished {} tag(s)", self.config.tags.len());
        Ok(diag)
    }

    /// Launch the daemon in the background. Its exit status is never awaited.
    fn start_daemon(&self, diag: &mut Diagnostics) {
        let daemon = self.engine.daemon(&self.config.daemon);
        let streams = if self.config.daemon.debug {
            Streams::Inherit
        } else {
            Streams::Discard
        };

        tracing::debug!("starting daemon: {}", daemon);
        if let Err(e) = self.executor.spawn_detached(&daemon, streams) {
            diag.warn(Warning::daemon_start(format!("daemon did not start: {}", e)));
        }
    }

    async fn login(&self) -> Result<(), PipelineError> {
        let Some(login) = login_step(&self.engine, self.config) else {
            self.output
                .notice("Registry credentials not provided. Guest mode enabled.");
            return Ok(());
        };

        tracing::debug!("logging in: {}", login);
        self.executor
            .run(&login, Streams::Discard)
            .await
            .context(AuthenticationSnafu)
    }
}
