//! Shared AST nodes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

/// A column reference, optionally qualified by a table alias,
/// e.g. the `r."Zip Code"` in `r."Zip Code" IN (...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

impl Ident {
    pub fn bare(name: &str) -> Self {
        Self {
            qualifier: None,
            name: name.to_string(),
        }
    }

    pub fn qualified(qualifier: &str, name: &str) -> Self {
        Self {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }
    }
}
