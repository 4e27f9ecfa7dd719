//! Defines the AST for WHERE-clause conditions.

use crate::ast::common::Ident;
use model::{audience::filter::GeoLogic, core::value::Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// A comparison against a literal, e.g. `"Years of Experience" >= 5`.
    Compare(Compare),

    /// Membership in a literal list, e.g. `"State" IN ('CA','NY')`.
    InList { column: Ident, values: Vec<Value> },

    /// Membership in the zip set produced by a radius CTE,
    /// e.g. `r."Zip Code" IN (SELECT zip_code FROM radius_0)`.
    InCte { column: Ident, cte: String },

    /// An explicitly parenthesized condition.
    Group(Box<Cond>),

    /// Conditions joined by a single combinator, rendered without
    /// surrounding parentheses.
    Combine { op: Combinator, conds: Vec<Cond> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    pub column: Ident,
    pub op: CompareOp,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,    // =
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn keyword(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl From<GeoLogic> for Combinator {
    fn from(logic: GeoLogic) -> Self {
        match logic {
            GeoLogic::And => Combinator::And,
            GeoLogic::Or => Combinator::Or,
        }
    }
}
