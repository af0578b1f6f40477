//! Tag filtering for the portfolio galleries.

use atelier_content::model::PortfolioItem;

/// Sentinel filter tag meaning "no filtering".
pub const ALL_TAG: &str = "all";

/// The ordered subsequence of `items` visible under `tag`.
///
/// `"all"` returns the whole collection in order. Any other tag keeps the
/// entries whose tag set contains it, preserving their relative order
/// (stable filter, never re-sorted). Pure; recomputed on every call.
pub fn derive_visible<'a>(items: &'a [PortfolioItem], tag: &str) -> Vec<&'a PortfolioItem> {
    if tag == ALL_TAG {
        items.iter().collect()
    } else {
        items.iter().filter(|item| item.has_tag(tag)).collect()
    }
}

/// The tags offered by the filter bar: `"all"` followed by every distinct
/// tag in the collection, in first-appearance order.
pub fn filter_tags(items: &[PortfolioItem]) -> Vec<String> {
    let mut tags = vec![ALL_TAG.to_string()];
    for item in items {
        for tag in &item.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// View state for one gallery page: the currently active filter tag.
#[derive(Debug, Clone)]
pub struct GalleryView {
    active_filter: String,
}

impl GalleryView {
    /// A fresh gallery shows everything.
    pub fn new() -> Self {
        Self {
            active_filter: ALL_TAG.to_string(),
        }
    }

    /// Replace the active filter tag.
    pub fn set_filter(&mut self, tag: impl Into<String>) {
        self.active_filter = tag.into();
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// The visible subset of `items` under the most recently set filter.
    pub fn visible<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        derive_visible(items, &self.active_filter)
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}
