use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The two-level tag taxonomy as served by `GET /api/tags`.
///
/// `primary` is the ordered list of top-level categories; `secondary` maps
/// each category name to its ordered list of items. Every key in `secondary`
/// corresponds to an entry in `primary` — the portal guarantees this for
/// fetched state, and [`crate::store::TagStore`] preserves it across local
/// mirroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagHierarchy {
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: HashMap<String, Vec<String>>,
}

impl TagHierarchy {
    /// Whether `name` exists as a primary category.
    pub fn has_primary(&self, name: &str) -> bool {
        self.primary.iter().any(|t| t == name)
    }

    /// Whether `name` exists as a secondary item under `primary`.
    pub fn has_secondary(&self, primary: &str, name: &str) -> bool {
        self.secondary
            .get(primary)
            .is_some_and(|items| items.iter().any(|t| t == name))
    }

    /// The secondary items of a category. Empty for unknown categories.
    pub fn secondary_of(&self, primary: &str) -> &[String] {
        self.secondary.get(primary).map_or(&[], Vec::as_slice)
    }
}

/// Acknowledgement body returned by every mutating portal endpoint.
///
/// Anything other than `success: true` is a failure; `message` carries the
/// server-supplied reason when there is one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/tags/primary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPrimaryTagInput {
    pub tag: String,
}

/// Body of `PUT /api/tags/primary/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameTagInput {
    pub new_tag: String,
}

/// Body of `POST /api/tags/secondary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSecondaryTagInput {
    pub primary_tag: String,
    pub secondary_tag: String,
}
