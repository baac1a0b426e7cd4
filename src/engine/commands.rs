// ABOUTME: Command builder for the external container engine CLI.
// ABOUTME: Turns config records into invocations without performing any I/O.

use chrono::{DateTime, SecondsFormat, Utc};

use super::invocation::{CommandKind, Invocation};
use super::proxy::{EnvSnapshot, add_env_arg, augment_proxy_args};
use crate::config::{BuildConfig, DaemonConfig, EngineConfig, LoginConfig, PullConfig};

/// Builds invocations of the engine CLI and its daemon.
#[derive(Debug, Clone)]
pub struct Engine {
    program: String,
    daemon_program: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            program: config.program.clone(),
            daemon_program: config.daemon_program.clone(),
        }
    }

    fn command<I, S>(&self, kind: CommandKind, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(kind, self.program.clone(), args)
    }

    pub fn version(&self) -> Invocation {
        self.command(CommandKind::VersionProbe, ["version"])
    }

    pub fn info(&self) -> Invocation {
        self.command(CommandKind::InfoProbe, ["info"])
    }

    /// The password goes to stdin only, never into argv.
    pub fn login(&self, login: &LoginConfig) -> Invocation {
        let mut args = vec![
            "login".to_string(),
            "-u".to_string(),
            login.username.clone(),
            "--password-stdin".to_string(),
        ];
        if let Some(email) = login.email.as_deref().filter(|e| !e.is_empty()) {
            args.push("-e".to_string());
            args.push(email.to_string());
        }
        args.push(login.registry.clone());

        self.command(CommandKind::Login, args)
            .with_stdin(login.password.clone())
    }

    pub fn pull(&self, pull: &PullConfig) -> Invocation {
        self.command(CommandKind::Pull, ["pull".to_string(), pull.reference()])
    }

    pub fn cache_pull(&self, image: &str) -> Invocation {
        self.command(CommandKind::CachePull, ["pull", image])
    }

    pub fn tag(&self, pull: &PullConfig, tag: &str, registry: &str) -> Invocation {
        self.command(
            CommandKind::Tag,
            ["tag".to_string(), pull.reference(), pull.target(registry, tag)],
        )
    }

    pub fn push(&self, pull: &PullConfig, tag: &str, registry: &str) -> Invocation {
        self.command(
            CommandKind::Push,
            ["push".to_string(), pull.target(registry, tag)],
        )
    }

    pub fn remove_image(&self, pull: &PullConfig) -> Invocation {
        self.command(CommandKind::RemoveImage, ["rmi".to_string(), pull.reference()])
    }

    pub fn prune(&self) -> Invocation {
        self.command(CommandKind::Prune, ["system", "prune", "-f"])
    }

    /// Build invocation with label-schema labels stamped at `now`.
    pub fn build(&self, build: &BuildConfig, env: &EnvSnapshot, now: DateTime<Utc>) -> Invocation {
        let mut args = vec![
            "build".to_string(),
            "--rm=true".to_string(),
            "-f".to_string(),
            build.dockerfile.clone(),
            "-t".to_string(),
            build.name.clone(),
            build.context.clone(),
        ];

        if build.squash {
            args.push("--squash".to_string());
        }
        if build.compress {
            args.push("--compress".to_string());
        }
        if build.pull {
            args.push("--pull=true".to_string());
        }
        if build.no_cache {
            args.push("--no-cache".to_string());
        }
        for image in &build.cache_from {
            args.push("--cache-from".to_string());
            args.push(image.clone());
        }

        let mut build_args = build.args.clone();
        augment_proxy_args(&mut build_args, env);
        for key in &build.args_env {
            add_env_arg(&mut build_args, key, env);
        }
        for arg in build_args {
            args.push("--build-arg".to_string());
            args.push(arg);
        }

        for host in &build.add_host {
            args.push("--add-host".to_string());
            args.push(host.clone());
        }
        if !build.target.is_empty() {
            args.push("--target".to_string());
            args.push(build.target.clone());
        }

        let schema = [
            "schema-version=1.0".to_string(),
            format!(
                "build-date={}",
                now.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            format!("vcs-ref={}", build.name),
            format!("vcs-url={}", build.remote),
        ];
        for label in schema.iter().chain(&build.label_schema) {
            args.push("--label".to_string());
            args.push(format!("org.label-schema.{}", label));
        }
        for label in &build.labels {
            args.push("--label".to_string());
            args.push(label.clone());
        }

        self.command(CommandKind::Build, args)
    }

    /// Daemon invocation; flags for empty or false fields are left out.
    pub fn daemon(&self, daemon: &DaemonConfig) -> Invocation {
        let mut args: Vec<String> = vec![];

        if !daemon.storage_path.is_empty() {
            args.push("--data-root".to_string());
            args.push(daemon.storage_path.clone());
        }
        if !daemon.storage_driver.is_empty() {
            args.push("-s".to_string());
            args.push(daemon.storage_driver.clone());
        }
        if daemon.insecure && !daemon.registry.is_empty() {
            args.push("--insecure-registry".to_string());
            args.push(daemon.registry.clone());
        }
        if daemon.ipv6 {
            args.push("--ipv6".to_string());
        }
        if !daemon.mirror.is_empty() {
            args.push("--registry-mirror".to_string());
            args.push(daemon.mirror.clone());
        }
        if !daemon.bip.is_empty() {
            args.push("--bip".to_string());
            args.push(daemon.bip.clone());
        }
        for dns in &daemon.dns {
            args.push("--dns".to_string());
            args.push(dns.clone());
        }
        for search in &daemon.dns_search {
            args.push("--dns-search".to_string());
            args.push(search.clone());
        }
        if !daemon.mtu.is_empty() {
            args.push("--mtu".to_string());
            args.push(daemon.mtu.clone());
        }
        if daemon.experimental {
            args.push("--experimental".to_string());
        }

        Invocation::new(CommandKind::Daemon, self.daemon_program.clone(), args)
    }
}
