//! Defines the core rendering trait and context for converting AST to SQL.

use crate::dialect::Dialect;
use model::core::value::Value;

pub mod cond;
pub mod query;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamMode {
    /// Literals become dialect placeholders collected into `params`.
    Bind,
    /// Literals are rendered into the SQL text, matching the interpolated
    /// query form older audience records store.
    Inline,
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    mode: ParamMode,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            mode: ParamMode::Bind,
        }
    }

    /// A renderer that inlines literals instead of binding them.
    pub fn inline(dialect: &'a dyn Dialect) -> Self {
        Self {
            mode: ParamMode::Inline,
            ..Self::new(dialect)
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        match self.mode {
            ParamMode::Bind => {
                self.params.push(value);
                let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
                self.sql.push_str(&placeholder);
            }
            ParamMode::Inline => {
                self.sql.push_str(&self.dialect.render_literal(&value));
            }
        }
    }
}
