//! Portfolio items for the video and graphic galleries.

use serde::{Deserialize, Serialize};

/// Whether an item's media is a still image or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Free-text performance figures shown on an item's detail card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBlock {
    pub views: String,
    pub engagement: String,
}

/// A single entry in the video or graphic portfolio.
///
/// `tags` are the filter keys the gallery filter bar runs on; `category`
/// is the human-readable label shown on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub kind: MediaKind,
    pub media_source: String,
    pub tags: Vec<String>,
    pub year: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub stats: Option<StatsBlock>,
}

/// Field-level patch for a [`PortfolioItem`].
///
/// `Some(value)` overwrites the field, `None` preserves it. The admin panel
/// never clears an already-set optional field, so there is no tri-state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub kind: Option<MediaKind>,
    pub media_source: Option<String>,
    pub tags: Option<Vec<String>>,
    pub year: Option<String>,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub stats: Option<StatsBlock>,
}

impl PortfolioItem {
    /// Overlay `patch` onto this item: provided fields win, omitted fields
    /// keep their prior value.
    pub fn apply(&mut self, patch: PortfolioPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(media_source) = patch.media_source {
            self.media_source = media_source;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(client_name) = patch.client_name {
            self.client_name = Some(client_name);
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(stats) = patch.stats {
            self.stats = Some(stats);
        }
    }

    /// Whether this item carries the given filter tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
