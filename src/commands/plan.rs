// ABOUTME: Plan command implementation.
// ABOUTME: Prints the trace lines of a run without executing anything.

use republish::config::RunConfig;
use republish::engine::Engine;
use republish::error::Result;
use republish::output::Output;
use republish::pipeline::{batch, login_step};

/// Print the login (if any) and batch commands a run would execute.
pub fn plan(config: RunConfig, output: Output) -> Result<()> {
    let engine = Engine::new(&config.engine);

    if !config.daemon.disabled {
        output.trace(&engine.daemon(&config.daemon));
    }
    match login_step(&engine, &config) {
        Some(login) => output.trace(&login),
        None => output.notice("Registry credentials not provided. Guest mode enabled."),
    }
    for invocation in batch(&engine, &config) {
        output.trace(&invocation);
    }

    Ok(())
}
