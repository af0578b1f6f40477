//! The content store: single source of truth for the editable collections.
//!
//! One `ContentStore` is constructed at application start and passed by
//! reference to the views. Loads recover from missing or corrupt persisted
//! values by substituting the bundled defaults; mutations write the full
//! collection through to the medium before returning.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::defaults;
use crate::error::Result;
use crate::model::{Client, PortfolioItem, PortfolioPatch, ServiceItem, ServicePatch};
use crate::storage::{keys, StorageMedium};

/// The fixed admin credential pair. A deliberate simplification carried
/// over from the source site; this is not an authentication system.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "0414";

/// Store over a key-value persistence medium.
///
/// All operations run to completion before returning; there is no
/// batching, no debounce, and no retry. Concurrent contexts sharing one
/// medium overwrite each other last-write-wins.
#[derive(Debug)]
pub struct ContentStore<M: StorageMedium> {
    medium: M,
}

impl<M: StorageMedium> ContentStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Consume the store and hand back its medium (used by tests to
    /// simulate a reload).
    pub fn into_medium(self) -> M {
        self.medium
    }

    // ==================== Loads ====================

    /// Load a collection from its key, falling back to `fallback` when the
    /// persisted value is absent or unparsable. Never fails.
    fn load_collection<T: DeserializeOwned>(&self, key: &str, fallback: fn() -> Vec<T>) -> Vec<T> {
        match self.medium.get(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!("unparsable value under {key:?}, using bundled defaults: {err}");
                    fallback()
                }
            },
            None => fallback(),
        }
    }

    pub fn load_services(&self) -> Vec<ServiceItem> {
        self.load_collection(keys::SERVICES, defaults::default_services)
    }

    pub fn load_video_items(&self) -> Vec<PortfolioItem> {
        self.load_collection(keys::VIDEO_ITEMS, defaults::default_video_items)
    }

    pub fn load_graphic_items(&self) -> Vec<PortfolioItem> {
        self.load_collection(keys::GRAPHIC_ITEMS, defaults::default_graphic_items)
    }

    pub fn load_clients(&self) -> Vec<Client> {
        self.load_collection(keys::CLIENTS, defaults::default_clients)
    }

    // ==================== Persists ====================

    /// Serialize the full collection and write it through to the medium.
    fn persist_collection<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.medium.set(key, &raw)?;
        tracing::debug!("persisted {} entries under {key:?}", items.len());
        Ok(())
    }

    pub fn persist_services(&mut self, services: &[ServiceItem]) -> Result<()> {
        self.persist_collection(keys::SERVICES, services)
    }

    pub fn persist_video_items(&mut self, items: &[PortfolioItem]) -> Result<()> {
        self.persist_collection(keys::VIDEO_ITEMS, items)
    }

    pub fn persist_graphic_items(&mut self, items: &[PortfolioItem]) -> Result<()> {
        self.persist_collection(keys::GRAPHIC_ITEMS, items)
    }

    pub fn persist_clients(&mut self, clients: &[Client]) -> Result<()> {
        self.persist_collection(keys::CLIENTS, clients)
    }

    // ==================== Portfolio mutations ====================

    /// Prepend `item` to the video portfolio (most-recent-first) and
    /// persist. Ids are not deduplicated; an entry already holding the same
    /// id is retained behind the new one.
    pub fn add_video_item(&mut self, item: PortfolioItem) -> Result<Vec<PortfolioItem>> {
        let mut items = self.load_video_items();
        items.insert(0, item);
        self.persist_video_items(&items)?;
        Ok(items)
    }

    /// Prepend `item` to the graphic portfolio and persist.
    pub fn add_graphic_item(&mut self, item: PortfolioItem) -> Result<Vec<PortfolioItem>> {
        let mut items = self.load_graphic_items();
        items.insert(0, item);
        self.persist_graphic_items(&items)?;
        Ok(items)
    }

    /// Patch the video item with the given id. Unknown ids are a no-op.
    pub fn update_video_item(&mut self, id: &str, patch: PortfolioPatch) -> Result<Vec<PortfolioItem>> {
        let mut items = self.load_video_items();
        if let Some(item) = items.iter_mut().find(|i| i.id == id) {
            item.apply(patch);
        }
        self.persist_video_items(&items)?;
        Ok(items)
    }

    /// Patch the graphic item with the given id. Unknown ids are a no-op.
    pub fn update_graphic_item(&mut self, id: &str, patch: PortfolioPatch) -> Result<Vec<PortfolioItem>> {
        let mut items = self.load_graphic_items();
        if let Some(item) = items.iter_mut().find(|i| i.id == id) {
            item.apply(patch);
        }
        self.persist_graphic_items(&items)?;
        Ok(items)
    }

    /// Remove the video item with the given id, if present.
    pub fn remove_video_item(&mut self, id: &str) -> Result<Vec<PortfolioItem>> {
        let mut items = self.load_video_items();
        items.retain(|i| i.id != id);
        self.persist_video_items(&items)?;
        Ok(items)
    }

    /// Remove the graphic item with the given id, if present.
    pub fn remove_graphic_item(&mut self, id: &str) -> Result<Vec<PortfolioItem>> {
        let mut items = self.load_graphic_items();
        items.retain(|i| i.id != id);
        self.persist_graphic_items(&items)?;
        Ok(items)
    }

    // ==================== Service mutations ====================

    /// Patch the service with the given id. Services are never added or
    /// deleted, only edited in place.
    pub fn update_service(&mut self, id: &str, patch: ServicePatch) -> Result<Vec<ServiceItem>> {
        let mut services = self.load_services();
        if let Some(service) = services.iter_mut().find(|s| s.id == id) {
            service.apply(patch);
        }
        self.persist_services(&services)?;
        Ok(services)
    }

    // ==================== Client mutations ====================

    /// Append `client` to the logo strip (display order) and persist.
    pub fn add_client(&mut self, client: Client) -> Result<Vec<Client>> {
        let mut clients = self.load_clients();
        clients.push(client);
        self.persist_clients(&clients)?;
        Ok(clients)
    }

    /// Remove the client with the given id, if present.
    pub fn remove_client(&mut self, id: &str) -> Result<Vec<Client>> {
        let mut clients = self.load_clients();
        clients.retain(|c| c.id != id);
        self.persist_clients(&clients)?;
        Ok(clients)
    }

    // ==================== Reset ====================

    /// Erase every storage key, so subsequent loads return the bundled
    /// defaults. Irreversible for any edits made since the last persist;
    /// the confirming dialog is the caller's responsibility. Also clears
    /// the session flag.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        for key in keys::ALL {
            self.medium.remove(key)?;
        }
        tracing::debug!("cleared all storage keys");
        Ok(())
    }

    // ==================== Session ====================

    /// Check the credential pair. On success the session flag is set and
    /// persisted; on failure nothing changes.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.medium.set(keys::AUTH_FLAG, "true")?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Clear the session flag and its persisted value.
    pub fn logout(&mut self) -> Result<()> {
        Ok(self.medium.remove(keys::AUTH_FLAG)?)
    }

    /// Whether an edit session is active. Absent or unparsable flags read
    /// as logged out.
    pub fn is_authenticated(&self) -> bool {
        match self.medium.get(keys::AUTH_FLAG) {
            Some(raw) => raw.trim() == "true",
            None => false,
        }
    }
}
