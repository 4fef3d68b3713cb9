//! Projection of store state into terminal surfaces.
//!
//! Rendering is a pure function of `(hierarchy, selection)`; every pass
//! rebuilds the surfaces from scratch, so repeated projection of unchanged
//! state is identical output. There are no retained widgets and therefore
//! nothing to re-bind after a change — interactions are dispatched by tag
//! name through [`crate::app::App`].

pub mod render;

use crate::models::TagHierarchy;

/// Transient UI selection: at most one primary category expanded and at most
/// one secondary item active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active_primary: Option<String>,
    active_secondary: Option<String>,
}

impl Selection {
    /// The expanded primary category, if any.
    pub fn primary(&self) -> Option<&str> {
        self.active_primary.as_deref()
    }

    /// The active secondary item, if any.
    pub fn secondary(&self) -> Option<&str> {
        self.active_secondary.as_deref()
    }

    /// Toggle a primary category: selecting a new one collapses whichever
    /// was expanded, selecting the expanded one again collapses it.
    pub fn toggle_primary(&mut self, name: &str) {
        if self.active_primary.as_deref() == Some(name) {
            self.active_primary = None;
        } else {
            self.active_primary = Some(name.to_string());
        }
    }

    /// Activate a secondary item, deactivating any other.
    pub fn select_secondary(&mut self, name: &str) {
        self.active_secondary = Some(name.to_string());
    }

    /// Drop selections that no longer name an existing tag. Called after
    /// every confirmed mutation so a deleted or renamed-away tag can never
    /// stay highlighted.
    pub fn prune(&mut self, tags: &TagHierarchy) {
        if self
            .active_primary
            .as_deref()
            .is_some_and(|p| !tags.has_primary(p))
        {
            self.active_primary = None;
        }
        if self.active_secondary.as_deref().is_some_and(|s| {
            !tags
                .primary
                .iter()
                .any(|p| tags.has_secondary(p, s))
        }) {
            self.active_secondary = None;
        }
    }
}

/// The three rendered regions, rebuilt together on every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surfaces {
    /// Admin tag-editor listing (primary tags plus the expanded category's
    /// secondary tags).
    pub editor: String,
    /// The primary-category select control.
    pub primary_select: String,
    /// The site navigation menu with per-category dropdowns.
    pub nav_menu: String,
}

/// Project the hierarchy and selection into all three surfaces, in fixed
/// order: editor listing, then select control, then navigation menu.
pub fn project(tags: &TagHierarchy, selection: &Selection) -> Surfaces {
    Surfaces {
        editor: render::editor_list(tags, selection),
        primary_select: render::primary_select(tags, selection),
        nav_menu: render::nav_menu(tags, selection),
    }
}
