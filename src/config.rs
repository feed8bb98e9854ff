//! Sync configuration loaded from a YAML file.
//!
//! Field names stay camelCase on disk so existing configuration documents
//! keep working unchanged.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Top-level sync configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Log verbosity level (overridden by RUST_LOG when set)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Source server base URL
    pub source: String,

    /// Target server base URL
    pub target: String,

    /// Environment variable holding the target Basic-Auth username
    pub target_username_env: String,

    /// Environment variable holding the target Basic-Auth password
    pub target_password_env: String,

    /// Artifacts to synchronize, processed in order
    pub artifacts: Vec<ArtifactSyncSpec>,
}

/// One artifact to synchronize between a source and a target repository
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSyncSpec {
    pub source_repository: String,
    pub target_repository: String,
    pub group_id: String,
    pub artifact_id: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl SyncConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SyncConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
