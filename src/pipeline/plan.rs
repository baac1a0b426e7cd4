// ABOUTME: Assembles the ordered command batch for one run.
// ABOUTME: Pure: the same config always yields the same invocations.

use crate::config::RunConfig;
use crate::engine::{Engine, Invocation};

/// The login invocation, or `None` in guest mode.
pub fn login_step(engine: &Engine, config: &RunConfig) -> Option<Invocation> {
    if config.login.is_guest() {
        None
    } else {
        Some(engine.login(&config.login))
    }
}

/// Commands run after login, in execution order:
/// version, info, cache pulls, pull, then tag (and push unless dry-run) per
/// tag, then rmi and prune when cleanup is on.
pub fn batch(engine: &Engine, config: &RunConfig) -> Vec<Invocation> {
    let registry = config.daemon.registry.as_str();
    let mut cmds = vec![engine.version(), engine.info()];

    cmds.extend(config.cache_from.iter().map(|image| engine.cache_pull(image)));
    cmds.push(engine.pull(&config.pull));

    for tag in &config.tags {
        cmds.push(engine.tag(&config.pull, tag, registry));
        if !config.dry_run {
            cmds.push(engine.push(&config.pull, tag, registry));
        }
    }

    if config.cleanup {
        cmds.push(engine.remove_image(&config.pull));
        cmds.push(engine.prune());
    }

    cmds
}
