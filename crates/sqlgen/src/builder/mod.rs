//! Translates audience filters into the query AST.
//!
//! Clause order is fixed: specialty, geographic, experience. Every clause is
//! optional; an empty filter compiles to the bare feed scan.

use crate::{
    ast::{
        common::{Ident, TableRef},
        cond::{Combinator, Compare, CompareOp, Cond},
        query::{AudienceQuery, RadiusCte, SelectColumn},
    },
    taxonomy::SpecialtyColumns,
};
use model::{
    audience::filter::{AudienceFilters, AudienceKind, ExperienceFilter},
    core::value::Value,
};

/// Output columns shared by both feed tables.
const BASE_FIELDS: [(&str, &str); 7] = [
    ("First Name", "fn"),
    ("Last Name", "ln"),
    ("Email1", "email"),
    ("Telephone", "phone"),
    ("City", "ct"),
    ("State", "st"),
    ("Zip Code", "zip"),
];

const FEED_SCHEMA: &str = "public";
const FEED_ALIAS: &str = "r";

pub fn audience_query(
    kind: AudienceKind,
    filters: &AudienceFilters,
    specialties: &dyn SpecialtyColumns,
) -> AudienceQuery {
    let ctes = radius_ctes(filters);

    let mut clauses = Vec::new();
    if let Some(clause) = specialty_clause(&filters.specialties, specialties) {
        clauses.push(clause);
    }
    if let Some(clause) = geo_clause(filters, ctes.len()) {
        clauses.push(clause);
    }
    if kind.has_experience_filter()
        && let Some(filter) = &filters.experience_filter
        && let Some(clause) = experience_clause(filter)
    {
        clauses.push(clause);
    }

    AudienceQuery {
        ctes,
        from: TableRef {
            schema: Some(FEED_SCHEMA.to_string()),
            name: kind.feed_table().to_string(),
        },
        alias: FEED_ALIAS.to_string(),
        columns: BASE_FIELDS
            .iter()
            .map(|(column, alias)| SelectColumn {
                column: column.to_string(),
                alias: alias.to_string(),
            })
            .collect(),
        clauses,
    }
}

/// One CTE per valid region, numbered by position among valid regions only.
/// Invalid regions are skipped entirely and never shift the numbering, so
/// the references emitted by `geo_clause` always line up.
fn radius_ctes(filters: &AudienceFilters) -> Vec<RadiusCte> {
    filters
        .valid_zip_regions()
        .enumerate()
        .map(|(i, region)| RadiusCte {
            name: format!("radius_{i}"),
            center_zip: region.zip.clone(),
            radius_miles: region.radius,
        })
        .collect()
}

/// Specialties are always OR-combined, independent of the geo logic.
fn specialty_clause(specialties: &[String], lookup: &dyn SpecialtyColumns) -> Option<Cond> {
    if specialties.is_empty() {
        return None;
    }
    let conds = specialties
        .iter()
        .map(|specialty| {
            Cond::Compare(Compare {
                column: Ident::bare(&lookup.column_for(specialty)),
                op: CompareOp::Eq,
                value: Value::from("1"),
            })
        })
        .collect();
    Some(Cond::Combine {
        op: Combinator::Or,
        conds,
    })
}

/// The state condition and the zip-region disjunction, joined by the
/// user-selected geo logic when both are present.
fn geo_clause(filters: &AudienceFilters, cte_count: usize) -> Option<Cond> {
    let mut conds = Vec::new();

    let states: Vec<Value> = filters
        .states
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(Value::from)
        .collect();
    if !states.is_empty() {
        conds.push(Cond::InList {
            column: Ident::bare("State"),
            values: states,
        });
    }

    if cte_count > 0 {
        let zips = (0..cte_count)
            .map(|i| Cond::InCte {
                column: Ident::qualified(FEED_ALIAS, "Zip Code"),
                cte: format!("radius_{i}"),
            })
            .collect();
        conds.push(Cond::Group(Box::new(Cond::Combine {
            op: Combinator::Or,
            conds: zips,
        })));
    }

    if conds.is_empty() {
        return None;
    }
    Some(Cond::Combine {
        op: filters.geo_logic.into(),
        conds,
    })
}

/// Non-zero bounds become inequalities on the experience columns,
/// AND-combined. An all-zero filter emits nothing.
fn experience_clause(filter: &ExperienceFilter) -> Option<Cond> {
    if !filter.is_active() {
        return None;
    }

    let mut conds = Vec::new();
    let mut bound = |column: &str, op: CompareOp, amount: u32| {
        if amount > 0 {
            conds.push(Cond::Compare(Compare {
                column: Ident::bare(column),
                op,
                value: Value::Int(i64::from(amount)),
            }));
        }
    };
    bound("Years of Experience", CompareOp::GtEq, filter.min_years);
    bound("Years of Experience", CompareOp::LtEq, filter.max_years);
    bound("Months of Experience", CompareOp::GtEq, filter.min_months);
    bound("Months of Experience", CompareOp::LtEq, filter.max_months);

    Some(Cond::Combine {
        op: Combinator::And,
        conds,
    })
}
