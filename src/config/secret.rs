// ABOUTME: Where a registry credential comes from: inline text or the environment.
// ABOUTME: Resolved once, while the config file is loaded.

use serde::Deserialize;

use crate::error::{Error, Result};

/// A credential written inline or read from `{ env: VAR, default: ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SecretSource {
    Inline(String),
    Env {
        env: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl SecretSource {
    /// An unset or empty variable falls back to `default`.
    pub fn resolve(&self) -> Result<String> {
        match self {
            SecretSource::Inline(value) => Ok(value.clone()),
            SecretSource::Env { env, default } => std::env::var(env)
                .ok()
                .filter(|value| !value.is_empty())
                .or_else(|| default.clone())
                .ok_or_else(|| Error::MissingSecret(env.clone())),
        }
    }
}
