//! Decoding of the vocabulary bank as stored by the mobile app.
//!
//! The app persists items as camelCase JSON documents in an on-device
//! key-value store: either one record per key or the whole bank as a
//! single array. Timestamps are ISO-8601 strings in storage and are
//! parsed into `DateTime<Utc>` here, so everything downstream compares
//! real instants instead of raw strings.

use crate::error::Result;
use crate::types::VocabularyItem;

/// Decode a single stored vocabulary record.
pub fn decode_item(json: &str) -> Result<VocabularyItem> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a stored vocabulary bank (JSON array of records).
pub fn decode_bank(json: &str) -> Result<Vec<VocabularyItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a vocabulary bank for storage, e.g. after a review updated an
/// item's scheduling state.
pub fn encode_bank(items: &[VocabularyItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}
