// ABOUTME: Configuration types and parsing for republish.yml.
// ABOUTME: Handles YAML parsing, secret interpolation, and command-line overrides.

mod build;
mod daemon;
mod deserialize;
mod engine;
mod init;
mod login;
mod overrides;
mod pull;
mod secret;

pub use build::BuildConfig;
pub use daemon::{DEFAULT_STORAGE_PATH, DaemonConfig};
pub use engine::{EngineConfig, ReadinessConfig};
pub use init::init_config;
pub use login::LoginConfig;
pub use overrides::Overrides;
pub use pull::PullConfig;
pub use secret::SecretSource;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "republish.yml";
pub const CONFIG_FILENAME_ALT: &str = "republish.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".republish/config.yml";

/// Everything needed for one pipeline run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub login: LoginConfig,
    pub pull: PullConfig,
    pub daemon: DaemonConfig,
    /// Destination tags, pushed in order.
    pub tags: Vec<String>,
    /// Tag but never push.
    pub dry_run: bool,
    /// Remove the image and prune after pushing.
    pub cleanup: bool,
    /// Images pulled ahead of the source image; failures are ignored.
    pub cache_from: Vec<String>,
    pub engine: EngineConfig,
    pub readiness: ReadinessConfig,
}

impl RunConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Find the first config file present in `dir`.
    pub fn locate(dir: &Path) -> Option<PathBuf> {
        [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ]
        .into_iter()
        .find(|path| path.is_file())
    }

    /// Check the fields a run cannot do without.
    pub fn validate(&self) -> Result<()> {
        if self.pull.repo.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "source repository is required (pull.repo or --repo)".to_string(),
            ));
        }
        if self.readiness.attempts == 0 {
            return Err(Error::InvalidConfig(
                "readiness.attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn template() -> Self {
        RunConfig {
            login: LoginConfig {
                registry: "registry.example.com".to_string(),
                username: "deploy".to_string(),
                password: String::new(),
                email: None,
            },
            pull: PullConfig::new("my-org/my-app", "sha256:<digest>"),
            daemon: DaemonConfig {
                registry: "registry.example.com".to_string(),
                ..DaemonConfig::default()
            },
            tags: vec!["latest".to_string()],
            ..RunConfig::default()
        }
    }
}
