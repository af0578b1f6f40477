//! Client logos shown in the trusted-by strip.

use serde::{Deserialize, Serialize};

/// A client logo entry. `logo_source` is either an asset URI or an inline
/// data URL produced by the upload path (see [`crate::logo`]). Clients are
/// added and deleted whole; there is no field-level patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub logo_source: String,
}
