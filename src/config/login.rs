// ABOUTME: Registry login parameters.
// ABOUTME: Username and password may be literals or environment references.

use serde::Deserialize;
use std::fmt;

use super::deserialize::deserialize_secret;

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub registry: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub username: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: String,
    pub email: Option<String>,
}

impl LoginConfig {
    /// Login is skipped entirely when no password is configured.
    pub fn is_guest(&self) -> bool {
        self.password.is_empty()
    }
}

impl fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginConfig")
            .field("registry", &self.registry)
            .field("username", &self.username)
            .field("password", &if self.is_guest() { "" } else { "<redacted>" })
            .field("email", &self.email)
            .finish()
    }
}
