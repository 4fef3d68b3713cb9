//! HTTP client for the portal API.
//!
//! The portal owns the tag taxonomy and the user profile; this client is the
//! only place the crate talks to it. Configuration is via environment
//! variables:
//! - `MERIDIAN_PORTAL_URL` - Base URL (default: `http://localhost:5000`)
//!
//! Every mutating endpoint answers with an acknowledgement body carrying a
//! boolean `success`; anything other than `success: true` is surfaced as
//! [`ClientError::Rejected`]. Responses are decoded from the body regardless
//! of HTTP status, matching the portal's convention of shipping failures as
//! well-formed JSON.

use std::path::Path;

use reqwest::multipart;
use reqwest::Client;
use thiserror::Error;

use crate::models::{
    Ack, AddPrimaryTagInput, AddSecondaryTagInput, AvatarUpdate, RenameTagInput, SettingsInput,
    SettingsUpdate, TagHierarchy,
};

/// Default URL for a locally running portal.
const DEFAULT_URL: &str = "http://localhost:5000";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("portal rejected the request: {0}")]
    Rejected(String),

    #[error("could not read file: {0}")]
    File(#[from] std::io::Error),
}

/// HTTP client for the portal API.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    client: Client,
}

impl PortalClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MERIDIAN_PORTAL_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check an acknowledgement, converting `success: false` to an error.
    fn check(ack: Ack) -> Result<(), ClientError> {
        if ack.success {
            Ok(())
        } else {
            let reason = ack.message.unwrap_or_else(|| "请求未被接受".to_string());
            tracing::warn!("portal rejected request: {}", reason);
            Err(ClientError::Rejected(reason))
        }
    }

    // ============================================================
    // Tag Operations
    // ============================================================

    /// Fetch the full tag hierarchy.
    pub async fn get_tags(&self) -> Result<TagHierarchy, ClientError> {
        tracing::debug!("GET /api/tags");
        let tags = self
            .client
            .get(self.url("/api/tags"))
            .send()
            .await?
            .json()
            .await?;
        Ok(tags)
    }

    /// Create a primary category.
    pub async fn add_primary_tag(&self, tag: &str) -> Result<(), ClientError> {
        let ack: Ack = self
            .client
            .post(self.url("/api/tags/primary"))
            .json(&AddPrimaryTagInput {
                tag: tag.to_string(),
            })
            .send()
            .await?
            .json()
            .await?;
        Self::check(ack)
    }

    /// Rename a primary category.
    pub async fn rename_primary_tag(&self, tag: &str, new_tag: &str) -> Result<(), ClientError> {
        let path = format!("/api/tags/primary/{}", urlencoding::encode(tag));
        let ack: Ack = self
            .client
            .put(self.url(&path))
            .json(&RenameTagInput {
                new_tag: new_tag.to_string(),
            })
            .send()
            .await?
            .json()
            .await?;
        Self::check(ack)
    }

    /// Delete a primary category and everything under it.
    pub async fn delete_primary_tag(&self, tag: &str) -> Result<(), ClientError> {
        let path = format!("/api/tags/primary/{}", urlencoding::encode(tag));
        let ack: Ack = self
            .client
            .delete(self.url(&path))
            .send()
            .await?
            .json()
            .await?;
        Self::check(ack)
    }

    /// Create a secondary item under a primary category.
    pub async fn add_secondary_tag(&self, primary: &str, tag: &str) -> Result<(), ClientError> {
        let ack: Ack = self
            .client
            .post(self.url("/api/tags/secondary"))
            .json(&AddSecondaryTagInput {
                primary_tag: primary.to_string(),
                secondary_tag: tag.to_string(),
            })
            .send()
            .await?
            .json()
            .await?;
        Self::check(ack)
    }

    /// Rename a secondary item within its category.
    pub async fn rename_secondary_tag(
        &self,
        primary: &str,
        tag: &str,
        new_tag: &str,
    ) -> Result<(), ClientError> {
        let path = format!(
            "/api/tags/secondary/{}/{}",
            urlencoding::encode(primary),
            urlencoding::encode(tag)
        );
        let ack: Ack = self
            .client
            .put(self.url(&path))
            .json(&RenameTagInput {
                new_tag: new_tag.to_string(),
            })
            .send()
            .await?
            .json()
            .await?;
        Self::check(ack)
    }

    /// Delete a secondary item.
    pub async fn delete_secondary_tag(&self, primary: &str, tag: &str) -> Result<(), ClientError> {
        let path = format!(
            "/api/tags/secondary/{}/{}",
            urlencoding::encode(primary),
            urlencoding::encode(tag)
        );
        let ack: Ack = self
            .client
            .delete(self.url(&path))
            .send()
            .await?
            .json()
            .await?;
        Self::check(ack)
    }

    // ============================================================
    // Profile Operations
    // ============================================================

    /// Submit profile settings. Returns the portal's view of the update,
    /// including the new username when one was applied.
    pub async fn update_settings(
        &self,
        input: &SettingsInput,
    ) -> Result<SettingsUpdate, ClientError> {
        let update: SettingsUpdate = self
            .client
            .post(self.url("/api/profile/settings"))
            .json(input)
            .send()
            .await?
            .json()
            .await?;
        if update.success {
            Ok(update)
        } else {
            let reason = update
                .message
                .unwrap_or_else(|| "更新设置失败".to_string());
            tracing::warn!("settings update rejected: {}", reason);
            Err(ClientError::Rejected(reason))
        }
    }

    /// Upload a new avatar image. Returns the URL the portal now serves it
    /// from.
    pub async fn upload_avatar(&self, path: &Path) -> Result<AvatarUpdate, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());
        let form = multipart::Form::new()
            .part("avatar", multipart::Part::bytes(bytes).file_name(file_name));

        let update: AvatarUpdate = self
            .client
            .post(self.url("/api/profile/avatar"))
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;
        if update.success {
            Ok(update)
        } else {
            let reason = update
                .message
                .unwrap_or_else(|| "更新头像失败".to_string());
            tracing::warn!("avatar upload rejected: {}", reason);
            Err(ClientError::Rejected(reason))
        }
    }
}
