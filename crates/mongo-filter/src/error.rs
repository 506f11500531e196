use filter_model::NodeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The name is not an operator or function known to the compiler.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// The operator is known but has no MongoDB translation.
    #[error("{0} is not implemented")]
    NotImplemented(String),

    #[error("Unsupported node kind: {0}")]
    UnsupportedNodeKind(NodeKind),

    #[error("Arity mismatch for {operator}: expected {expected} argument(s), found {found}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        found: usize,
    },

    #[error("Filter nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl CompileError {
    /// Whether the failure was caused by the filter tree itself, so the
    /// request layer should report it as an unsupported filter expression.
    pub fn is_client_error(&self) -> bool {
        match self {
            CompileError::UnknownOperator(_)
            | CompileError::NotImplemented(_)
            | CompileError::UnsupportedNodeKind(_)
            | CompileError::ArityMismatch { .. }
            | CompileError::DepthExceeded { .. } => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
