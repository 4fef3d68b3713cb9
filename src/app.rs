//! Application controller.
//!
//! Owns the tag store, the transient selection and the notifier; every user
//! action flows through here. The cycle for a mutation is fixed: issue the
//! remote call through the store, mirror locally on success, prune stale
//! selection, record one notice. Callers then re-project the surfaces from
//! [`App::surfaces`] — a full pass over all three regions, never an
//! incremental patch.

use std::path::Path;

use crate::client::PortalClient;
use crate::config::Preferences;
use crate::content;
use crate::models::SettingsInput;
use crate::notify::{Notice, Notifier};
use crate::store::{StoreError, TagStore};
use crate::view::{self, render, Selection, Surfaces};

pub struct App {
    client: PortalClient,
    store: TagStore,
    selection: Selection,
    notifier: Notifier,
    prefs: Preferences,
}

impl App {
    pub fn new(client: PortalClient) -> Self {
        Self {
            client: client.clone(),
            store: TagStore::new(client),
            selection: Selection::default(),
            notifier: Notifier::new(),
            prefs: Preferences::load(),
        }
    }

    /// Project the current state into all three surfaces.
    pub fn surfaces(&self) -> Surfaces {
        view::project(self.store.tags(), &self.selection)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notifier.last()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }

    // ============================================================
    // Tag mutations
    // ============================================================

    /// Fetch the hierarchy from the portal. Local state is unchanged on
    /// failure.
    pub async fn load(&mut self) -> bool {
        let result = self.store.load().await;
        self.settle(result.map(|_| None), "加载标签失败")
    }

    pub async fn add_primary(&mut self, name: &str) -> bool {
        let result = self.store.add_primary(name).await;
        self.settle(result.map(|_| Some("添加一级标签成功")), "添加标签失败")
    }

    pub async fn rename_primary(&mut self, old: &str, new: &str) -> bool {
        let result = self.store.rename_primary(old, new).await;
        self.settle(result.map(|_| Some("更新标签成功")), "更新标签失败")
    }

    pub async fn delete_primary(&mut self, name: &str) -> bool {
        let result = self.store.delete_primary(name).await;
        self.settle(result.map(|_| Some("删除标签成功")), "删除标签失败")
    }

    pub async fn add_secondary(&mut self, primary: &str, name: &str) -> bool {
        let result = self.store.add_secondary(primary, name).await;
        self.settle(result.map(|_| Some("添加二级标签成功")), "添加标签失败")
    }

    pub async fn rename_secondary(&mut self, primary: &str, old: &str, new: &str) -> bool {
        let result = self.store.rename_secondary(primary, old, new).await;
        self.settle(result.map(|_| Some("更新标签成功")), "更新标签失败")
    }

    pub async fn delete_secondary(&mut self, primary: &str, name: &str) -> bool {
        let result = self.store.delete_secondary(primary, name).await;
        self.settle(result.map(|_| Some("删除标签成功")), "删除标签失败")
    }

    /// Record the outcome of a store operation as one notice and keep the
    /// selection consistent with whatever the mutation did.
    fn settle(
        &mut self,
        result: Result<Option<&'static str>, StoreError>,
        failed: &str,
    ) -> bool {
        match result {
            Ok(message) => {
                self.selection.prune(self.store.tags());
                if let Some(message) = message {
                    self.notifier.success(message);
                }
                true
            }
            Err(e) => {
                self.notifier.error(failed, e.to_string());
                false
            }
        }
    }

    // ============================================================
    // Selection
    // ============================================================

    /// Toggle a primary category in the navigation. Unknown names are
    /// rejected with a notice rather than silently highlighted.
    pub fn select_primary(&mut self, name: &str) -> bool {
        if !self.store.tags().has_primary(name) {
            self.notifier
                .error("选择标签失败", format!("一级标签\"{name}\"不存在"));
            return false;
        }
        self.selection.toggle_primary(name);
        true
    }

    /// Activate a secondary item and return its rendered detail panel.
    pub fn select_secondary(&mut self, name: &str) -> Option<String> {
        let known = self
            .store
            .tags()
            .primary
            .iter()
            .any(|p| self.store.tags().has_secondary(p, name));
        if !known {
            self.notifier
                .error("选择标签失败", format!("二级标签\"{name}\"不存在"));
            return None;
        }
        self.selection.select_secondary(name);
        Some(render::organ_panel(name, &content::lookup(name)))
    }

    // ============================================================
    // Profile
    // ============================================================

    /// Validate and submit profile settings. Returns the updated username
    /// when the portal applied a rename.
    pub async fn update_settings(&mut self, input: &SettingsInput) -> Option<Option<String>> {
        if let Err(reason) = input.validate() {
            self.notifier.error("更新设置失败", reason);
            return None;
        }
        match self.client.update_settings(input).await {
            Ok(update) => {
                self.notifier.success("设置已更新");
                Some(update.username)
            }
            Err(e) => {
                self.notifier.error("更新设置失败", e.to_string());
                None
            }
        }
    }

    /// Upload a new avatar image. Returns the URL the portal serves it from.
    pub async fn upload_avatar(&mut self, path: &Path) -> Option<String> {
        match self.client.upload_avatar(path).await {
            Ok(update) => {
                self.notifier.success("头像已更新");
                update.avatar_url
            }
            Err(e) => {
                self.notifier.error("更新头像失败", e.to_string());
                None
            }
        }
    }
}
