//! atelier-view: presentation-facing logic for the gallery pages.
//!
//! Derives the visible subset of a portfolio collection from the active
//! filter tag, and tracks the ephemeral interaction state (open lightbox,
//! expanded accordion section) that is never persisted.

pub mod filter;
pub mod panel;

pub use filter::*;
pub use panel::*;
