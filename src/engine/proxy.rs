// ABOUTME: Environment snapshot and build-argument augmentation from it.
// ABOUTME: Forwards proxy settings into builds unless the caller already set them.

use std::collections::HashMap;

/// Proxy variables forwarded to every build.
pub const PROXY_KEYS: [&str; 3] = ["http_proxy", "https_proxy", "no_proxy"];

/// A frozen copy of environment variables.
///
/// Taken once so that command building stays a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up `key` as given, falling back to its upper-case form.
    /// Empty values count as unset.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.non_empty(key)
            .or_else(|| self.non_empty(&key.to_uppercase()))
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Append the proxy variables from `env` to `args`.
pub fn augment_proxy_args(args: &mut Vec<String>, env: &EnvSnapshot) {
    for key in PROXY_KEYS {
        add_env_arg(args, key, env);
    }
}

/// Append `key=value` and `KEY=value` when `env` defines the key and no
/// argument for it exists yet in either case.
pub fn add_env_arg(args: &mut Vec<String>, key: &str, env: &EnvSnapshot) {
    let Some(value) = env.value(key) else {
        return;
    };
    if has_build_arg(args, key) {
        return;
    }

    let upper = key.to_uppercase();
    args.push(format!("{}={}", key, value));
    if upper != key {
        args.push(format!("{}={}", upper, value));
    }
}

/// Prefix match, so `http_proxy_extra=...` also counts as present.
fn has_build_arg(args: &[String], key: &str) -> bool {
    let upper = key.to_uppercase();
    args.iter()
        .any(|arg| arg.starts_with(key) || arg.starts_with(&upper))
}
