// ABOUTME: Image build parameters.
// ABOUTME: Only consumed by the build command builder, not by the republish run.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Source repository URL, recorded as the `vcs-url` label.
    pub remote: String,
    /// Default tag, also recorded as the `vcs-ref` label.
    pub name: String,
    pub dockerfile: String,
    pub context: String,
    pub tags: Vec<String>,
    /// Explicit `key=value` build arguments.
    pub args: Vec<String>,
    /// Environment variable names forwarded as build arguments.
    pub args_env: Vec<String>,
    pub target: String,
    pub squash: bool,
    pub pull: bool,
    pub cache_from: Vec<String>,
    pub compress: bool,
    pub label_schema: Vec<String>,
    pub labels: Vec<String>,
    pub no_cache: bool,
    pub add_host: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            remote: String::new(),
            name: String::new(),
            dockerfile: "Dockerfile".to_string(),
            context: ".".to_string(),
            tags: vec![],
            args: vec![],
            args_env: vec![],
            target: String::new(),
            squash: false,
            pull: false,
            cache_from: vec![],
            compress: false,
            label_schema: vec![],
            labels: vec![],
            no_cache: false,
            add_host: vec![],
        }
    }
}
