//! Inline encoding for uploaded client logos.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode an uploaded logo file as an inline `data:` URL, the form the
/// client collection persists it in.
pub fn encode_logo_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
