// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands, their arguments, and PLUGIN_* env fallbacks.

use clap::{Args, Parser, Subcommand};
use republish::config::Overrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "republish")]
#[command(about = "Pull an image by digest, re-tag it, and push it to a registry")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print command traces and the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (default: discover republish.yml)
    #[arg(short, long, global = true, env = "PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a republish.yml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Pull, tag, and push the configured image
    Run(RunArgs),

    /// Print the commands a run would execute without executing them
    Plan(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Source repository
    #[arg(long, env = "PLUGIN_REPO")]
    pub repo: Option<String>,

    /// Source content digest, e.g. sha256:...
    #[arg(long, env = "PLUGIN_DIGEST")]
    pub digest: Option<String>,

    /// Destination tags
    #[arg(long, env = "PLUGIN_TAGS", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Destination registry, also used for login
    #[arg(long, env = "PLUGIN_REGISTRY")]
    pub registry: Option<String>,

    #[arg(long, env = "PLUGIN_USERNAME")]
    pub username: Option<String>,

    /// Registry password, piped to the engine on stdin
    #[arg(long, env = "PLUGIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "PLUGIN_EMAIL")]
    pub email: Option<String>,

    /// Tag but do not push
    #[arg(long, env = "PLUGIN_DRY_RUN")]
    pub dry_run: bool,

    /// Remove the image and prune after pushing
    #[arg(long, env = "PLUGIN_CLEANUP")]
    pub cleanup: bool,

    /// Images to pull before the source image; failures are ignored
    #[arg(long, env = "PLUGIN_CACHE_FROM", value_delimiter = ',')]
    pub cache_from: Vec<String>,

    /// Do not start the daemon (it is already running)
    #[arg(long, env = "PLUGIN_DAEMON_OFF")]
    pub daemon_off: bool,

    #[arg(long, env = "PLUGIN_MIRROR")]
    pub mirror: Option<String>,

    /// Allow the destination registry over plain HTTP
    #[arg(long, env = "PLUGIN_INSECURE")]
    pub insecure: bool,

    #[arg(long, env = "PLUGIN_STORAGE_DRIVER")]
    pub storage_driver: Option<String>,

    #[arg(long, env = "PLUGIN_STORAGE_PATH")]
    pub storage_path: Option<String>,

    /// Show daemon output
    #[arg(long, env = "PLUGIN_DEBUG")]
    pub debug: bool,

    #[arg(long, env = "PLUGIN_BIP")]
    pub bip: Option<String>,

    #[arg(long, env = "PLUGIN_DNS", value_delimiter = ',')]
    pub dns: Vec<String>,

    #[arg(long, env = "PLUGIN_DNS_SEARCH", value_delimiter = ',')]
    pub dns_search: Vec<String>,

    #[arg(long, env = "PLUGIN_MTU")]
    pub mtu: Option<String>,

    #[arg(long, env = "PLUGIN_IPV6")]
    pub ipv6: bool,

    #[arg(long, env = "PLUGIN_EXPERIMENTAL")]
    pub experimental: bool,
}

impl From<RunArgs> for Overrides {
    fn from(args: RunArgs) -> Self {
        Overrides {
            repo: args.repo,
            digest: args.digest,
            tags: args.tags,
            registry: args.registry,
            username: args.username,
            password: args.password,
            email: args.email,
            dry_run: args.dry_run,
            cleanup: args.cleanup,
            cache_from: args.cache_from,
            daemon_off: args.daemon_off,
            mirror: args.mirror,
            insecure: args.insecure,
            storage_driver: args.storage_driver,
            storage_path: args.storage_path,
            debug: args.debug,
            bip: args.bip,
            dns: args.dns,
            dns_search: args.dns_search,
            mtu: args.mtu,
            ipv6: args.ipv6,
            experimental: args.experimental,
        }
    }
}
