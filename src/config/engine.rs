// ABOUTME: Engine executable selection and daemon readiness polling settings.
// ABOUTME: Defaults match a stock Docker installation on PATH.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub program: String,
    pub daemon_program: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            program: "docker".to_string(),
            daemon_program: "dockerd".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReadinessConfig {
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,
}

fn default_attempts() -> u32 {
    15
}

fn default_interval() -> Duration {
    Duration::from_secs(1)
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        ReadinessConfig {
            attempts: default_attempts(),
            interval: default_interval(),
        }
    }
}
