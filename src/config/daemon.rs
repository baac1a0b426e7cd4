// ABOUTME: Container daemon parameters.
// ABOUTME: Each populated field becomes one daemon command-line flag.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub registry: String,
    pub mirror: String,
    pub insecure: bool,
    pub storage_driver: String,
    pub storage_path: String,
    /// The daemon is managed externally and must not be started.
    pub disabled: bool,
    /// Show daemon output on the parent's streams.
    pub debug: bool,
    pub bip: String,
    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub mtu: String,
    pub ipv6: bool,
    pub experimental: bool,
}

pub const DEFAULT_STORAGE_PATH: &str = "/var/lib/docker";

impl Default for DaemonConfig {
    fn default() -> Self {
        DaemonConfig {
            registry: String::new(),
            mirror: String::new(),
            insecure: false,
            storage_driver: String::new(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            disabled: false,
            debug: false,
            bip: String::new(),
            dns: vec![],
            dns_search: vec![],
            mtu: String::new(),
            ipv6: false,
            experimental: false,
        }
    }
}
