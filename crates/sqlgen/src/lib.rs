//! Compiles audience filter specifications into SQL queries over the
//! liveramp feed tables.
//!
//! The compiler is a pure function of its input: it performs no IO, holds no
//! state, and identical filters always produce byte-identical output. Two
//! renderings are offered: the parameterized form ([`compile`]) binds every
//! literal as a query parameter, while the text form ([`compile_text`])
//! produces the interpolated query text older audience records store in
//! their `sql_query` field.
//! Identifiers (specialty columns in particular) are quoted but never
//! parameterized in either form.

use crate::{
    builder::audience_query,
    dialect::{Dialect, Postgres},
    renderer::{Render, Renderer},
    taxonomy::{SpecialtyColumns, VerbatimSpecialties},
};
use model::{
    audience::filter::{AudienceFilters, AudienceKind},
    core::value::Value,
};
use serde::Serialize;
use tracing::debug;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod renderer;
pub mod taxonomy;

/// A rendered query and the literals to bind to its placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Compiles filters into a parameterized Postgres query.
pub fn compile(kind: AudienceKind, filters: &AudienceFilters) -> CompiledQuery {
    compile_with(kind, filters, &Postgres, &VerbatimSpecialties)
}

/// [`compile`] with an explicit dialect and specialty lookup.
pub fn compile_with(
    kind: AudienceKind,
    filters: &AudienceFilters,
    dialect: &dyn Dialect,
    specialties: &dyn SpecialtyColumns,
) -> CompiledQuery {
    let ast = audience_query(kind, filters, specialties);
    debug!(
        kind = %kind,
        ctes = ast.ctes.len(),
        clauses = ast.clauses.len(),
        "compiled audience query"
    );

    let mut renderer = Renderer::new(dialect);
    ast.render(&mut renderer);
    let (sql, params) = renderer.finish();
    CompiledQuery { sql, params }
}

/// Compiles filters into the legacy interpolated query text.
pub fn compile_text(kind: AudienceKind, filters: &AudienceFilters) -> String {
    compile_text_with(kind, filters, &VerbatimSpecialties)
}

/// [`compile_text`] with an explicit specialty lookup.
pub fn compile_text_with(
    kind: AudienceKind,
    filters: &AudienceFilters,
    specialties: &dyn SpecialtyColumns,
) -> String {
    let ast = audience_query(kind, filters, specialties);
    let mut renderer = Renderer::inline(&Postgres);
    ast.render(&mut renderer);
    renderer.finish().0
}

/// Query text for an RN audience.
pub fn rn_query(filters: &AudienceFilters) -> String {
    compile_text(AudienceKind::Rn, filters)
}

/// Query text for an HCP audience.
pub fn hcp_query(filters: &AudienceFilters) -> String {
    compile_text(AudienceKind::Hcp, filters)
}
