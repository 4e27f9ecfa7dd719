use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("audience name is required")]
    NameRequired,

    #[error("zip region '{0}' must have both a zip code and a radius")]
    IncompleteZipRegion(String),

    #[error("unknown audience kind: {0}")]
    UnknownKind(String),
}
