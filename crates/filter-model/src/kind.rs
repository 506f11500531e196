use serde::{Deserialize, Serialize};
use std::fmt;

/// Token kind of a filter tree node, as assigned by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // Literals
    String,
    Number,
    Boolean,
    Guid,
    Date,
    Time,
    DateTime,

    /// A bare property or member name, e.g. `CompanyName`.
    Property,

    /// Parenthesized value list, the right-hand side of `in`.
    List,

    // Operators and calls
    Logical,
    Comparison,
    Function,
    Lambda,
    Navigation,

    // Produced by the parser but without a compile rule
    Null,
    Duration,
    ParameterAlias,
    Enum,
    Geography,
}

impl NodeKind {
    /// Literal kinds whose token text carries a value.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            NodeKind::String
                | NodeKind::Number
                | NodeKind::Boolean
                | NodeKind::Guid
                | NodeKind::Date
                | NodeKind::Time
                | NodeKind::DateTime
        )
    }

    /// Kinds resolved through the operator table.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            NodeKind::Logical
                | NodeKind::Comparison
                | NodeKind::Function
                | NodeKind::Lambda
                | NodeKind::Navigation
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Guid => "guid",
            NodeKind::Date => "date",
            NodeKind::Time => "time",
            NodeKind::DateTime => "date_time",
            NodeKind::Property => "property",
            NodeKind::List => "list",
            NodeKind::Logical => "logical",
            NodeKind::Comparison => "comparison",
            NodeKind::Function => "function",
            NodeKind::Lambda => "lambda",
            NodeKind::Navigation => "navigation",
            NodeKind::Null => "null",
            NodeKind::Duration => "duration",
            NodeKind::ParameterAlias => "parameter_alias",
            NodeKind::Enum => "enum",
            NodeKind::Geography => "geography",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
