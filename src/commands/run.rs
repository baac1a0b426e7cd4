// ABOUTME: Run command implementation.
// ABOUTME: Executes the republish pipeline against the local engine.

use republish::config::RunConfig;
use republish::engine::ProcessExecutor;
use republish::error::Result;
use republish::output::Output;
use republish::pipeline::Pipeline;

/// Execute the pipeline with real child processes.
pub async fn run(config: RunConfig, mut output: Output) -> Result<()> {
    output.start_timer();

    let executor = ProcessExecutor;
    let diag = Pipeline::new(&config, &executor, &output).run().await?;

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    output.success(&format!(
        "Republished {} to {} tag(s)",
        config.pull.reference(),
        config.tags.len()
    ));
    Ok(())
}
