// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Resolves env-backed secrets while the config file is loaded.

use serde::Deserialize;

use super::SecretSource;

/// Accepts a literal string or `{ env: VAR, default: ... }` and resolves it.
pub fn deserialize_secret<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = SecretSource::deserialize(deserializer)?;
    value.resolve().map_err(serde::de::Error::custom)
}
