//! Migration orchestration.
//!
//! Walks the configured artifact list: fetches the source and target
//! inventories, diffs the version sets, and replicates every version the
//! target is missing. Specs, versions, and assets are processed strictly
//! in order, one at a time.

use std::collections::HashSet;

use crate::config::{ArtifactSyncSpec, SyncConfig};
use crate::error::Result;
use crate::services::nexus_client::{NexusClient, NexusComponent, TargetCredentials};

/// Reduce component records to the set of distinct version strings.
pub fn versions_of(components: &[NexusComponent]) -> HashSet<String> {
    components
        .iter()
        .map(|component| component.version.clone())
        .collect()
}

/// Drives the migration for every configured artifact spec.
pub struct SyncService {
    client: NexusClient,
    config: SyncConfig,
    dry_run: bool,
}

impl SyncService {
    /// Create a new sync service for the given configuration.
    pub fn new(config: SyncConfig, dry_run: bool) -> Self {
        Self {
            client: NexusClient::new(),
            config,
            dry_run,
        }
    }

    /// Run the full migration pass.
    ///
    /// Returns the total number of versions migrated across all specs.
    /// The first error from any step aborts the run.
    pub async fn run(&self) -> Result<u64> {
        let credentials = TargetCredentials {
            username_env: self.config.target_username_env.clone(),
            password_env: self.config.target_password_env.clone(),
        };

        let mut total_migrated = 0u64;
        for spec in &self.config.artifacts {
            total_migrated += self.sync_spec(spec, &credentials).await?;
        }

        tracing::info!(total_migrated, "Migration run complete");
        Ok(total_migrated)
    }

    /// Synchronize one artifact spec, returning its migrated count.
    async fn sync_spec(
        &self,
        spec: &ArtifactSyncSpec,
        credentials: &TargetCredentials,
    ) -> Result<u64> {
        tracing::info!(
            server = %self.config.source,
            group = %spec.group_id,
            artifact = %spec.artifact_id,
            "Loading versions from source server"
        );
        let source_components = self
            .client
            .search_components(
                &self.config.source,
                &spec.source_repository,
                &spec.group_id,
                &spec.artifact_id,
            )
            .await?;
        tracing::info!(
            count = source_components.len(),
            "Found versions on source server"
        );

        tracing::info!(
            server = %self.config.target,
            group = %spec.group_id,
            artifact = %spec.artifact_id,
            "Loading versions from target server"
        );
        let target_components = self
            .client
            .search_components(
                &self.config.target,
                &spec.target_repository,
                &spec.group_id,
                &spec.artifact_id,
            )
            .await?;
        let target_versions = versions_of(&target_components);
        tracing::info!(
            count = target_versions.len(),
            "Found versions on target server"
        );

        let mut migrated = 0u64;
        for component in &source_components {
            if target_versions.contains(&component.version) {
                tracing::debug!(
                    component = %component.coordinate(),
                    "Already present on target server"
                );
                continue;
            }

            if self.dry_run {
                tracing::info!(component = %component.coordinate(), "Would migrate (dry run)");
            } else {
                tracing::info!(component = %component.coordinate(), "Migrating");
                self.client
                    .upload_component(
                        &self.config.target,
                        &spec.target_repository,
                        credentials,
                        component,
                    )
                    .await?;
            }
            migrated += 1;
        }

        tracing::info!(
            migrated,
            group = %spec.group_id,
            artifact = %spec.artifact_id,
            "Migrated versions for artifact"
        );
        Ok(migrated)
    }
}
