//! Defines the AST for a compiled audience selection query.

use crate::ast::{common::TableRef, cond::Cond};

/// Miles to meters, the unit `ST_DWithin` takes for geography types.
pub const METERS_PER_MILE: f64 = 1609.34;

/// An optional list of radius CTEs followed by a single SELECT over the
/// feed table. Each clause is appended to the always-true `WHERE 1=1` base
/// as ` AND (...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudienceQuery {
    pub ctes: Vec<RadiusCte>,
    pub from: TableRef,
    pub alias: String,
    pub columns: Vec<SelectColumn>,
    pub clauses: Vec<Cond>,
}

/// A projected column aliased to its short output name,
/// e.g. `"First Name" as fn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectColumn {
    pub column: String,
    pub alias: String,
}

/// A CTE selecting every zip code whose shape lies within `radius_miles`
/// of the center zip, resolved against the `zip_shp` reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusCte {
    pub name: String,
    pub center_zip: String,
    pub radius_miles: f64,
}
