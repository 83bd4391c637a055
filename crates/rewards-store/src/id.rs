//! Receipt identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Opaque identifier handed back when a receipt is registered.
///
/// Backed by a random UUID v4 and shown in hyphenated lowercase form,
/// e.g. `7fb1377b-b223-49d9-a31a-5a02701dd310`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Only the exact text handed out by [`ReceiptId`]'s `Display` parses.
///
/// Uppercase, simple (no hyphens), braced and `urn:uuid:` spellings of the
/// same UUID were never issued, so they fail like any other unknown text:
/// with [`StoreError::NotFound`] rather than a format error.
impl FromStr for ReceiptId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::try_parse(s).map_err(|_| StoreError::not_found(s))?;
        if uuid.hyphenated().to_string() != s {
            return Err(StoreError::not_found(s));
        }
        Ok(ReceiptId(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_parse() {
        let id = ReceiptId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.parse::<ReceiptId>().unwrap(), id);
    }

    #[test]
    fn test_generated_ids_are_v4() {
        let id = ReceiptId::generate();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_garbage_is_not_found() {
        assert_eq!(
            "not-a-uuid".parse::<ReceiptId>(),
            Err(StoreError::not_found("not-a-uuid"))
        );
    }

    #[test]
    fn test_only_canonical_spelling_parses() {
        let id = ReceiptId::generate();
        let canonical = id.to_string();
        assert_eq!(canonical.parse::<ReceiptId>(), Ok(id));

        let uuid = id.as_uuid();
        for alias in [
            canonical.to_uppercase(),
            uuid.simple().to_string(),
            uuid.braced().to_string(),
            uuid.urn().to_string(),
            format!(" {canonical}"),
        ] {
            assert_eq!(
                alias.parse::<ReceiptId>(),
                Err(StoreError::not_found(&alias)),
                "{alias}"
            );
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ReceiptId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
