//! Audience payload and record shapes exchanged with the backend.

use crate::{audience::filter::AudienceFilters, errors::ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a create-audience request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub filters: AudienceFilters,
}

impl AudienceCreate {
    /// Form-layer checks performed before a payload is submitted: the name
    /// must not be blank, and a region the user started filling in (it has a
    /// label) must be complete.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        for region in &self.filters.zip_regions {
            if !region.label.trim().is_empty() && !region.is_valid() {
                return Err(ValidationError::IncompleteZipRegion(region.label.clone()));
            }
        }
        Ok(())
    }
}

/// A persisted audience as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_archived: bool,
    /// Query text stored alongside the filters by earlier backend versions.
    pub sql_query: Option<String>,
    pub filters: Option<AudienceFilters>,
    pub user_id: i64,
}
