//! Studio services shown on the home page.

use serde::{Deserialize, Serialize};

/// A studio service card. Services are a fixed set seeded at install time:
/// the admin surface edits them in place but never adds or deletes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_source: String,
}

/// Field-level patch for a [`ServiceItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_source: Option<String>,
}

impl ServiceItem {
    /// Overlay `patch` onto this service: provided fields win, omitted
    /// fields keep their prior value.
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_source) = patch.image_source {
            self.image_source = image_source;
        }
    }
}
