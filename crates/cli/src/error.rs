use mongo_filter::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the filter tree file: {0}")]
    TreeFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the filter tree as JSON: {0}")]
    TreeDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize output to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Unsupported filter expression: {0}")]
    Compile(#[from] CompileError),
}
