//! Mapping entity: the association between a short code and its target URL.

use chrono::{DateTime, Utc};

/// A persisted short code to target URL association.
///
/// Mappings are immutable once created. The store is the owner of record and
/// callers only ever hold copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            created_at,
        }
    }
}

/// Input data for committing a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewMapping> for Mapping {
    fn from(new_mapping: NewMapping) -> Self {
        Mapping::new(
            new_mapping.code,
            new_mapping.target_url,
            new_mapping.created_at,
        )
    }
}
