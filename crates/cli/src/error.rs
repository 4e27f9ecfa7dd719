use model::errors::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid audience payload: {0}")]
    Validation(#[from] ValidationError),

    #[error("Audience record {0} has no filters to recompile")]
    MissingFilters(i64),
}
