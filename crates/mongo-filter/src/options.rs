use serde::{Deserialize, Serialize};

/// How literal values end up in the compiled fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralMode {
    /// Literal text is spliced into the fragment.
    #[default]
    Inline,
    /// Literals are replaced by `@p1`, `@p2`, ... and returned separately.
    Bind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub literals: LiteralMode,
    /// Maximum tree depth, counting the root as 1. `None` means no limit.
    pub max_depth: Option<usize>,
}

impl CompileOptions {
    pub fn bind() -> Self {
        CompileOptions {
            literals: LiteralMode::Bind,
            ..Default::default()
        }
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}
