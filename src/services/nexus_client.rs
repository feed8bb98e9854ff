//! Sonatype Nexus Repository REST API client.
//!
//! Handles the Nexus 3.x REST API for searching components with
//! continuation-token pagination, downloading raw assets, and publishing
//! components through the multipart upload endpoint.

use bytes::Bytes;
use reqwest::{multipart, Client, StatusCode};
use serde::Deserialize;

use crate::error::{Result, SyncError};

/// Checksum side-file suffixes that are never uploaded as assets.
const CHECKSUM_SUFFIXES: [&str; 4] = [".sha1", ".md5", ".sha256", ".sha512"];

/// Names of the environment variables holding the target server's
/// Basic-Auth credentials. Resolved at upload time, not at startup.
#[derive(Debug, Clone)]
pub struct TargetCredentials {
    pub username_env: String,
    pub password_env: String,
}

impl TargetCredentials {
    /// Resolve the credential pair from the environment.
    fn resolve(&self) -> Result<(String, String)> {
        let username = std::env::var(&self.username_env)
            .map_err(|_| SyncError::Config(format!("{} not set", self.username_env)))?;
        let password = std::env::var(&self.password_env)
            .map_err(|_| SyncError::Config(format!("{} not set", self.password_env)))?;
        Ok((username, password))
    }
}

// --- Nexus API response types ---

#[derive(Debug, Deserialize)]
pub struct NexusSearchResponse {
    pub items: Vec<NexusComponent>,
    #[serde(rename = "continuationToken")]
    pub continuation_token: Option<String>,
}

/// One published version of an artifact, with its file set.
#[derive(Debug, Clone, Deserialize)]
pub struct NexusComponent {
    pub group: String,
    pub name: String,
    pub version: String,
    pub assets: Vec<NexusAsset>,
}

impl NexusComponent {
    /// `group:name:version` coordinate string used in logs and errors.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

/// One physical file belonging to a component.
#[derive(Debug, Clone, Deserialize)]
pub struct NexusAsset {
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
    #[serde(default)]
    pub maven2: Maven2Attributes,
}

/// Maven-format attributes attached to an asset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Maven2Attributes {
    pub classifier: Option<String>,
    pub extension: Option<String>,
}

/// File name: the tail of the download URL after the last `/`.
pub fn file_name_of(download_url: &str) -> &str {
    download_url
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(download_url)
}

/// File extension: the tail of the file name after the last `.`,
/// or the whole file name when it has no dot.
pub fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or(file_name)
}

/// Whether the file is a checksum side-file rather than transferable content.
pub fn is_checksum_file(file_name: &str) -> bool {
    CHECKSUM_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

/// Nexus REST API client.
///
/// One instance talks to both servers; every operation takes the base URL
/// of the instance it addresses.
pub struct NexusClient {
    client: Client,
}

impl NexusClient {
    /// Create a new Nexus client.
    ///
    /// No request timeout is configured: the migration waits for each call
    /// to resolve, however long it takes.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Make a GET request and decode the JSON response body
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch every component matching (repository, group, name), following
    /// continuation tokens until the server stops returning one.
    ///
    /// Records come back in server order, across all pages, unmodified.
    pub async fn search_components(
        &self,
        base_url: &str,
        repository: &str,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<NexusComponent>> {
        let search_url = format!(
            "{}/service/rest/v1/search?repository={}&group={}&name={}",
            base_url, repository, group_id, artifact_id
        );

        let mut items = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page_url = match &token {
                Some(t) => format!("{}&continuationToken={}", search_url, t),
                None => search_url.clone(),
            };

            let page: NexusSearchResponse = self.get_json(&page_url).await?;
            items.extend(page.items);

            match page.continuation_token {
                Some(t) => token = Some(t),
                None => break,
            }
        }

        Ok(items)
    }

    /// Download an asset's binary content from its download URL
    pub async fn download_asset(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }

    /// Publish one component to the target server's upload endpoint.
    ///
    /// Downloads each non-checksum asset from the source, assembles the
    /// multipart form the Nexus maven2 upload expects, and POSTs it with
    /// Basic auth resolved from the configured environment variables.
    /// Asset parts are numbered from 1 over the assets actually included.
    pub async fn upload_component(
        &self,
        base_url: &str,
        repository: &str,
        credentials: &TargetCredentials,
        component: &NexusComponent,
    ) -> Result<()> {
        let mut form = multipart::Form::new()
            .text("maven2.groupId", component.group.clone())
            .text("maven2.artifactId", component.name.clone())
            .text("maven2.version", component.version.clone())
            .text("maven2.generate-pom", "false");

        let mut index = 1;
        for asset in &component.assets {
            let file_name = file_name_of(&asset.download_url).to_string();
            if is_checksum_file(&file_name) {
                tracing::debug!(file = %file_name, "Skipping checksum side-file");
                continue;
            }
            let extension = extension_of(&file_name).to_string();

            tracing::debug!(file = %file_name, "Downloading asset");
            let content = self.download_asset(&asset.download_url).await?;

            let part = multipart::Part::bytes(content.to_vec()).file_name(file_name);
            form = form
                .part(format!("maven2.asset{}", index), part)
                .text(format!("maven2.asset{}.extension", index), extension);
            if let Some(classifier) = &asset.maven2.classifier {
                form = form.text(format!("maven2.asset{}.classifier", index), classifier.clone());
            }
            index += 1;
        }

        let (username, password) = credentials.resolve()?;
        let url = format!(
            "{}/service/rest/v1/components?repository={}",
            base_url, repository
        );
        let response = self
            .client
            .post(&url)
            .basic_auth(username, Some(password))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                component = %component.coordinate(),
                "Component upload rejected"
            );
            return Err(SyncError::UploadRejected {
                status: status.as_u16(),
                group: component.group.clone(),
                name: component.name.clone(),
                version: component.version.clone(),
            });
        }

        Ok(())
    }
}

impl Default for NexusClient {
    fn default() -> Self {
        Self::new()
    }
}
