//! Alert record and response envelope types

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single synthetic alert record.
///
/// Immutable once constructed; field values are strings drawn from the
/// fixed vocabularies in [`crate::catalog`] or formatted from random
/// draws. `id` is not guaranteed unique within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub event: String,
    pub severity: String,
    /// Always "Active".
    pub status: String,
    /// ISO-8601, now minus a random 1-60 minute offset.
    pub sent: String,
    /// ISO-8601, generation time.
    pub effective: String,
    /// ISO-8601, generation time plus one hour.
    pub expires: String,
    pub headline: String,
    pub description: String,
    #[serde(rename = "affectedArea")]
    pub affected_area: String,
    pub host: String,
    pub urgency: String,
    /// Always "Observed".
    pub certainty: String,
}

/// Response envelope wrapping a generated batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: usize,
    /// Fresh opaque continuation token, independent of the input seed.
    pub next_offset: String,
    /// Generation order; not semantically meaningful.
    pub alerts: Vec<Alert>,
    /// ISO-8601 generation timestamp.
    pub updated: String,
}

impl AlertCollection {
    /// Wrap a batch in the envelope, stamping the generation time.
    pub fn new(alerts: Vec<Alert>, next_offset: String) -> Self {
        Self {
            kind: "AlertCollection".to_string(),
            count: alerts.len(),
            next_offset,
            alerts,
            updated: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_counts_alerts() {
        let collection = AlertCollection::new(Vec::new(), "token".to_string());
        assert_eq!(collection.kind, "AlertCollection");
        assert_eq!(collection.count, 0);
        assert_eq!(collection.next_offset, "token");
    }

    #[test]
    fn test_serde_field_renames() {
        let collection = AlertCollection::new(Vec::new(), "token".to_string());
        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "AlertCollection");
        assert!(json.get("kind").is_none());
    }
}
