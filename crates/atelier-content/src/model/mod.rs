//! Domain models for the editable collections.
//!
//! Every entity carries a stable string `id` unique within its collection.
//! Edits arrive as per-entity patch values with overlay semantics: a
//! provided field overwrites, an omitted field preserves the prior value.

pub mod client;
pub mod portfolio;
pub mod service;

pub use client::*;
pub use portfolio::*;
pub use service::*;

/// Generate a timestamp-derived item id, unique at creation time within a
/// single browsing context.
pub fn next_item_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_item_id_is_numeric() {
        let id = next_item_id();
        assert!(id.parse::<i64>().is_ok());
    }
}
