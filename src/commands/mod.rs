// ABOUTME: Command module aggregator for the republish CLI.
// ABOUTME: Re-exports run and plan command handlers.

mod plan;
mod run;

pub use plan::plan;
pub use run::run;

use republish::config::{Overrides, RunConfig};
use republish::error::Result;
use std::path::Path;

/// Load the config file (explicit or discovered), apply overrides, validate.
pub fn resolve_config(
    cwd: &Path,
    explicit: Option<&Path>,
    overrides: Overrides,
) -> Result<RunConfig> {
    let mut config = match explicit {
        Some(path) => RunConfig::load(path)?,
        None => match RunConfig::locate(cwd) {
            Some(path) => {
                tracing::debug!("using config file {}", path.display());
                RunConfig::load(&path)?
            }
            None => RunConfig::default(),
        },
    };

    config.apply(overrides);
    config.validate()?;
    Ok(config)
}
