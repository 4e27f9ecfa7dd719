//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::value::Value;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a literal value into SQL text, used when the caller wants
    /// the interpolated query form instead of bind parameters.
    fn render_literal(&self, value: &Value) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL").
    fn name(&self) -> String;
}

/// The only dialect the feed backend runs; the radius CTEs lean on PostGIS.
#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn render_literal(&self, value: &Value) -> String {
        match value {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::String(v) => format!("'{}'", v.replace('\'', "''")),
            Value::Boolean(v) => if *v { "true" } else { "false" }.to_string(),
            Value::Null => "NULL".to_string(),
        }
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}
