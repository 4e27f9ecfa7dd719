//! Specialty-to-column resolution.
//!
//! The feed tables expose one flag column per specialty. The form layer
//! submits display names; mapping a display name to its taxonomy column is
//! owned by the caller, so the compiler takes the lookup as an explicit
//! collaborator rather than holding a baked-in table.

use std::collections::HashMap;

pub trait SpecialtyColumns: Send + Sync {
    /// Resolves a specialty display name to the flag column that marks it.
    fn column_for(&self, specialty: &str) -> String;
}

/// Uses the specialty name itself as the column name, the behavior the
/// current wire format assumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimSpecialties;

impl SpecialtyColumns for VerbatimSpecialties {
    fn column_for(&self, specialty: &str) -> String {
        specialty.to_string()
    }
}

/// Resolves specialties through a pre-loaded taxonomy map, falling back to
/// the verbatim name for unmapped entries.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyTable {
    columns: HashMap<String, String>,
}

impl TaxonomyTable {
    pub fn new(columns: HashMap<String, String>) -> Self {
        Self { columns }
    }

    pub fn insert(&mut self, specialty: &str, column: &str) {
        self.columns.insert(specialty.to_string(), column.to_string());
    }
}

impl SpecialtyColumns for TaxonomyTable {
    fn column_for(&self, specialty: &str) -> String {
        self.columns
            .get(specialty)
            .cloned()
            .unwrap_or_else(|| specialty.to_string())
    }
}
