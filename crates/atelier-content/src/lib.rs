//! atelier-content: editable content collections for the studio site.
//!
//! The site's editable data (services, video and graphic portfolios,
//! client logos) lives in a [`ContentStore`] backed by a string key-value
//! [`StorageMedium`]. Every collection falls back to a bundled default
//! dataset when no usable persisted copy exists, and every mutation is
//! written through to the medium immediately.

pub mod defaults;
pub mod error;
pub mod logo;
pub mod model;
pub mod storage;
pub mod store;

pub use error::*;
pub use logo::*;
pub use model::*;
pub use storage::*;
pub use store::*;
