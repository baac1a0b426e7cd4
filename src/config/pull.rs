// ABOUTME: Source image identified by repository and content digest.
// ABOUTME: Formats the digest reference and the per-tag destination reference.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullConfig {
    pub repo: String,
    pub sha: String,
}

impl PullConfig {
    pub fn new(repo: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            sha: sha.into(),
        }
    }

    /// `repo@sha`. The digest is passed through unvalidated.
    pub fn reference(&self) -> String {
        format!("{}@{}", self.repo, self.sha)
    }

    /// `registry/repo:tag`.
    ///
    /// The registry prefix is unconditional: an empty registry yields
    /// `/repo:tag`, which is left for the engine to reject or resolve.
    pub fn target(&self, registry: &str, tag: &str) -> String {
        format!("{}/{}:{}", registry, self.repo, tag)
    }
}
