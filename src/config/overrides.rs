// ABOUTME: Command-line and environment overrides applied on top of the config file.
// ABOUTME: Set values replace file values; unset values leave them untouched.

use super::RunConfig;

/// Values supplied on the command line. `None`/`false`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub repo: Option<String>,
    pub digest: Option<String>,
    pub tags: Vec<String>,
    pub registry: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub dry_run: bool,
    pub cleanup: bool,
    pub cache_from: Vec<String>,
    pub daemon_off: bool,
    pub mirror: Option<String>,
    pub insecure: bool,
    pub storage_driver: Option<String>,
    pub storage_path: Option<String>,
    pub debug: bool,
    pub bip: Option<String>,
    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub mtu: Option<String>,
    pub ipv6: bool,
    pub experimental: bool,
}

fn replace(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn replace_list(slot: &mut Vec<String>, values: Vec<String>) {
    if !values.is_empty() {
        *slot = values;
    }
}

impl RunConfig {
    pub fn apply(&mut self, overrides: Overrides) {
        replace(&mut self.pull.repo, overrides.repo);
        replace(&mut self.pull.sha, overrides.digest);
        replace_list(&mut self.tags, overrides.tags);

        // One registry flag feeds both the login target and the push prefix
        if let Some(registry) = overrides.registry {
            self.login.registry = registry.clone();
            self.daemon.registry = registry;
        }
        replace(&mut self.login.username, overrides.username);
        replace(&mut self.login.password, overrides.password);
        if overrides.email.is_some() {
            self.login.email = overrides.email;
        }

        self.dry_run |= overrides.dry_run;
        self.cleanup |= overrides.cleanup;
        replace_list(&mut self.cache_from, overrides.cache_from);

        self.daemon.disabled |= overrides.daemon_off;
        replace(&mut self.daemon.mirror, overrides.mirror);
        self.daemon.insecure |= overrides.insecure;
        replace(&mut self.daemon.storage_driver, overrides.storage_driver);
        replace(&mut self.daemon.storage_path, overrides.storage_path);
        self.daemon.debug |= overrides.debug;
        replace(&mut self.daemon.bip, overrides.bip);
        replace_list(&mut self.daemon.dns, overrides.dns);
        replace_list(&mut self.daemon.dns_search, overrides.dns_search);
        replace(&mut self.daemon.mtu, overrides.mtu);
        self.daemon.ipv6 |= overrides.ipv6;
        self.daemon.experimental |= overrides.experimental;
    }
}
