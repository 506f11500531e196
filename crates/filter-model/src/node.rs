use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};

/// One node of a parsed filter tree.
///
/// `value` is the raw token text as written in the query: the operator or
/// function name for inner nodes, the literal text (string literals keep
/// their quotes) for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterNode {
    pub kind: NodeKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FilterNode>,
}

impl FilterNode {
    pub fn new(kind: NodeKind, value: impl Into<String>, children: Vec<FilterNode>) -> Self {
        FilterNode {
            kind,
            value: value.into(),
            children,
        }
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self::new(kind, value, Vec::new())
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Property, name)
    }

    /// String literal from its unquoted content; the quotes are added here.
    pub fn string(content: &str) -> Self {
        Self::leaf(NodeKind::String, format!("'{content}'"))
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Number, text)
    }

    pub fn boolean(value: bool) -> Self {
        Self::leaf(NodeKind::Boolean, value.to_string())
    }

    pub fn list(items: Vec<FilterNode>) -> Self {
        Self::new(NodeKind::List, "(", items)
    }

    pub fn comparison(op: &str, left: FilterNode, right: FilterNode) -> Self {
        Self::new(NodeKind::Comparison, op, vec![left, right])
    }

    pub fn logical(op: &str, children: Vec<FilterNode>) -> Self {
        Self::new(NodeKind::Logical, op, children)
    }

    pub fn function(name: &str, args: Vec<FilterNode>) -> Self {
        Self::new(NodeKind::Function, name, args)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path; a single leaf is 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FilterNode::depth)
            .max()
            .unwrap_or(0)
    }
}
