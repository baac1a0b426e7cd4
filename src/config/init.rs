// ABOUTME: Config scaffolding for new pipelines.
// ABOUTME: Creates republish.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, RunConfig};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&RunConfig::template());
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &RunConfig) -> String {
    let tags = config
        .tags
        .iter()
        .map(|t| format!("  - {}\n", t))
        .collect::<String>();
    format!(
        r#"pull:
  repo: {}
  sha: "{}"
tags:
{}login:
  registry: {}
  username: {}
  # Read from the environment; leave unset for anonymous pulls and pushes
  password:
    env: REGISTRY_PASSWORD
    default: ""
daemon:
  registry: {}
  # disabled: true   # when the daemon is already running
dry_run: false
cleanup: false
"#,
        config.pull.repo,
        config.pull.sha,
        tags,
        config.login.registry,
        config.login.username,
        config.daemon.registry,
    )
}
