//! Normalized item identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable lookup key for a checklist item, derived from its display text.
///
/// Normalization lower-cases the text and replaces every space with a
/// hyphen. Nothing else is touched: no trimming, no punctuation handling.
/// The transform is idempotent, so an already-normalized id passes through
/// unchanged.
///
/// Two distinct display texts can normalize to the same id; the catalog
/// loader rejects such catalogs up front (see `tally-persistence`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Derives the id for an item's display text.
    pub fn normalize(point: &str) -> Self {
        Self(point.to_lowercase().replace(' ', "-"))
    }

    /// Wraps an already-normalized id (persisted keys, route parameters).
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_hyphenates() {
        let id = ItemId::normalize("Use Strong Passwords");
        assert_eq!(id.as_str(), "use-strong-passwords");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = ItemId::normalize("Enable 2FA Everywhere");
        let twice = ItemId::normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_passes_other_characters_through() {
        let id = ItemId::normalize("Don't Reuse PINs (ever)");
        assert_eq!(id.as_str(), "don't-reuse-pins-(ever)");
    }

    #[test]
    fn test_normalize_no_trimming() {
        let id = ItemId::normalize(" Padded ");
        assert_eq!(id.as_str(), "-padded-");
    }

    #[test]
    fn test_id_serialization_transparent() {
        let id = ItemId::normalize("Use MFA");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"use-mfa\"");

        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = ItemId::from_string("rotate-keys");
        assert_eq!(format!("{}", id), "rotate-keys");
    }
}
