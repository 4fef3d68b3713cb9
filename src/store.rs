//! Local mirror of the portal's tag taxonomy.
//!
//! [`TagStore`] holds the hierarchy as of the last confirmed exchange with
//! the portal. Every mutation is two-phase: the network call is the only
//! point of failure, and the local mirror is updated synchronously once the
//! portal has acknowledged. Nothing is mutated speculatively, so no rollback
//! exists.
//!
//! Mutating operations take `&mut self`; a second mutation cannot be issued
//! while one is outstanding.

use thiserror::Error;

use crate::client::{ClientError, PortalClient};
use crate::models::TagHierarchy;

/// Failures of a store operation. Either the input never left the process
/// ([`StoreError::Invalid`]) or the portal call failed; local state is
/// untouched in both cases.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// In-memory mirror of the two-level tag taxonomy, synchronized with the
/// portal.
pub struct TagStore {
    client: PortalClient,
    tags: TagHierarchy,
}

impl TagStore {
    /// An empty store. Call [`TagStore::load`] to populate it.
    pub fn new(client: PortalClient) -> Self {
        Self {
            client,
            tags: TagHierarchy::default(),
        }
    }

    #[cfg(test)]
    fn seeded(client: PortalClient, tags: TagHierarchy) -> Self {
        Self { client, tags }
    }

    /// The hierarchy as of the last confirmed sync.
    pub fn tags(&self) -> &TagHierarchy {
        &self.tags
    }

    /// Fetch the full hierarchy from the portal, replacing local state
    /// wholesale. On failure local state is left unchanged.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        let fetched = self.client.get_tags().await?;
        self.tags = fetched;
        tracing::debug!(
            primary = self.tags.primary.len(),
            "tag hierarchy loaded"
        );
        Ok(())
    }

    // ============================================================
    // Primary categories
    // ============================================================

    /// Create a primary category. Appends to the end of the primary list
    /// and initializes an empty secondary list under the new name.
    pub async fn add_primary(&mut self, name: &str) -> Result<(), StoreError> {
        let name = non_empty(name, "标签名称不能为空")?;
        if self.tags.has_primary(&name) {
            return Err(StoreError::Invalid(format!("一级标签\"{name}\"已存在")));
        }

        self.client.add_primary_tag(&name).await?;

        self.tags.secondary.insert(name.clone(), Vec::new());
        self.tags.primary.push(name);
        Ok(())
    }

    /// Rename a primary category in place, carrying its secondary list over
    /// to the new name.
    pub async fn rename_primary(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        let new = non_empty(new, "标签名称不能为空")?;
        let index = self
            .tags
            .primary
            .iter()
            .position(|t| t == old)
            .ok_or_else(|| StoreError::Invalid(format!("一级标签\"{old}\"不存在")))?;
        if new == old {
            return Err(StoreError::Invalid("新名称与原名称相同".to_string()));
        }
        if self.tags.has_primary(&new) {
            return Err(StoreError::Invalid(format!("一级标签\"{new}\"已存在")));
        }

        self.client.rename_primary_tag(old, &new).await?;

        self.tags.primary[index] = new.clone();
        if let Some(items) = self.tags.secondary.remove(old) {
            self.tags.secondary.insert(new, items);
        }
        Ok(())
    }

    /// Delete a primary category together with its secondary list.
    ///
    /// Destructive: callers must confirm with the user before invoking.
    pub async fn delete_primary(&mut self, name: &str) -> Result<(), StoreError> {
        let index = self
            .tags
            .primary
            .iter()
            .position(|t| t == name)
            .ok_or_else(|| StoreError::Invalid(format!("一级标签\"{name}\"不存在")))?;

        self.client.delete_primary_tag(name).await?;

        self.tags.primary.remove(index);
        self.tags.secondary.remove(name);
        Ok(())
    }

    // ============================================================
    // Secondary items
    // ============================================================

    /// Create a secondary item under an existing primary category.
    pub async fn add_secondary(&mut self, primary: &str, name: &str) -> Result<(), StoreError> {
        let name = non_empty(name, "标签名称不能为空")?;
        if primary.trim().is_empty() {
            return Err(StoreError::Invalid("请先选择一级标签".to_string()));
        }
        if !self.tags.has_primary(primary) {
            return Err(StoreError::Invalid(format!("一级标签\"{primary}\"不存在")));
        }
        if self.tags.has_secondary(primary, &name) {
            return Err(StoreError::Invalid(format!("二级标签\"{name}\"已存在")));
        }

        self.client.add_secondary_tag(primary, &name).await?;

        self.tags
            .secondary
            .entry(primary.to_string())
            .or_default()
            .push(name);
        Ok(())
    }

    /// Rename a secondary item in place within its category.
    pub async fn rename_secondary(
        &mut self,
        primary: &str,
        old: &str,
        new: &str,
    ) -> Result<(), StoreError> {
        let new = non_empty(new, "标签名称不能为空")?;
        let index = self
            .tags
            .secondary
            .get(primary)
            .and_then(|items| items.iter().position(|t| t == old))
            .ok_or_else(|| StoreError::Invalid(format!("二级标签\"{old}\"不存在")))?;
        if new == old {
            return Err(StoreError::Invalid("新名称与原名称相同".to_string()));
        }
        if self.tags.has_secondary(primary, &new) {
            return Err(StoreError::Invalid(format!("二级标签\"{new}\"已存在")));
        }

        self.client.rename_secondary_tag(primary, old, &new).await?;

        self.tags
            .secondary
            .get_mut(primary)
            .expect("category checked above")[index] = new;
        Ok(())
    }

    /// Delete a secondary item.
    ///
    /// Destructive: callers must confirm with the user before invoking.
    pub async fn delete_secondary(&mut self, primary: &str, name: &str) -> Result<(), StoreError> {
        let index = self
            .tags
            .secondary
            .get(primary)
            .and_then(|items| items.iter().position(|t| t == name))
            .ok_or_else(|| StoreError::Invalid(format!("二级标签\"{name}\"不存在")))?;

        self.client.delete_secondary_tag(primary, name).await?;

        self.tags
            .secondary
            .get_mut(primary)
            .expect("category checked above")
            .remove(index);
        Ok(())
    }
}

/// Trim a name and reject it when nothing remains.
fn non_empty(name: &str, reason: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(StoreError::Invalid(reason.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TagStore {
        let mut tags = TagHierarchy::default();
        tags.primary = vec!["心脏".to_string(), "肝脏".to_string()];
        tags.secondary
            .insert("心脏".to_string(), vec!["心悸".to_string()]);
        tags.secondary.insert("肝脏".to_string(), Vec::new());
        // Client pointed at a closed port: any operation that reaches the
        // network fails, so these tests prove validation short-circuits
        // before any request is issued.
        TagStore::seeded(PortalClient::new("http://127.0.0.1:1"), tags)
    }

    #[tokio::test]
    async fn add_primary_rejects_blank_names() {
        let mut store = store();
        let err = store.add_primary("   ").await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert_eq!(store.tags().primary.len(), 2);
    }

    #[tokio::test]
    async fn add_primary_rejects_duplicates() {
        let mut store = store();
        let err = store.add_primary("心脏").await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn rename_primary_rejects_unchanged_name() {
        let mut store = store();
        let err = store.rename_primary("心脏", "心脏").await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn rename_primary_rejects_unknown_source() {
        let mut store = store();
        let err = store.rename_primary("脾", "脾胃").await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn add_secondary_requires_known_category() {
        let mut store = store();
        let err = store.add_secondary("脾", "食欲不振").await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn add_secondary_rejects_duplicate_within_category() {
        let mut store = store();
        let err = store.add_secondary("心脏", "心悸").await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn network_failure_leaves_state_unchanged() {
        let mut store = store();
        let before = store.tags().clone();
        let err = store.add_primary("脾").await.unwrap_err();
        assert!(matches!(err, StoreError::Client(_)));
        assert_eq!(store.tags(), &before);
    }
}
