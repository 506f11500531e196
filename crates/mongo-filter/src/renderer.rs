//! Post-order rendering of a filter tree into MongoDB query text.

use crate::{
    compiler::BoundValue,
    error::{CompileError, Result},
    operator::Operator,
    options::{CompileOptions, LiteralMode},
    template::{self, Template},
};
use filter_model::{FilterNode, NodeKind};
use tracing::{trace, warn};

/// Holds the state of a single compilation.
///
/// A renderer is created per call, so the only shared data is the static
/// operator table and the caller's options.
pub struct Renderer<'a> {
    pub params: Vec<BoundValue>,
    pub options: &'a CompileOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            params: Vec::new(),
            options,
        }
    }

    /// Consumes the renderer and returns the bound parameters.
    pub fn finish(self) -> Vec<BoundValue> {
        self.params
    }

    pub fn render(&mut self, node: &FilterNode) -> Result<String> {
        self.render_at(node, 1)
    }

    fn render_at(&mut self, node: &FilterNode, depth: usize) -> Result<String> {
        if let Some(limit) = self.options.max_depth
            && depth > limit
        {
            return Err(CompileError::DepthExceeded { limit });
        }

        match node.kind {
            NodeKind::String => {
                let text = strip_quotes(&node.value);
                Ok(self.literal(node.kind, text))
            }
            NodeKind::Number
            | NodeKind::Boolean
            | NodeKind::Guid
            | NodeKind::Date
            | NodeKind::Time
            | NodeKind::DateTime => Ok(self.literal(node.kind, &node.value)),
            NodeKind::Property => Ok(node.value.clone()),
            NodeKind::List => self.render_list(node, depth),
            NodeKind::Logical
            | NodeKind::Comparison
            | NodeKind::Function
            | NodeKind::Lambda
            | NodeKind::Navigation => self.render_operator(node, depth),
            NodeKind::Null
            | NodeKind::Duration
            | NodeKind::ParameterAlias
            | NodeKind::Enum
            | NodeKind::Geography => Err(CompileError::UnsupportedNodeKind(node.kind)),
        }
    }

    fn literal(&mut self, kind: NodeKind, text: &str) -> String {
        match self.options.literals {
            LiteralMode::Inline => text.to_string(),
            LiteralMode::Bind => {
                self.params.push(BoundValue {
                    kind,
                    value: text.to_string(),
                });
                format!("@p{}", self.params.len())
            }
        }
    }

    fn render_list(&mut self, node: &FilterNode, depth: usize) -> Result<String> {
        let items = self.render_children(node, depth)?;
        Ok(format!("[{}]", items.join(", ")))
    }

    fn render_operator(&mut self, node: &FilterNode, depth: usize) -> Result<String> {
        let op = Operator::lookup(&node.value)
            .ok_or_else(|| CompileError::UnknownOperator(node.value.clone()))?;

        let text = match op.template(node.children.len()) {
            Template::Slots(text) => text,
            Template::Unsupported => {
                warn!("Filter uses unimplemented operator: {}", op);
                return Err(CompileError::NotImplemented(op.name().to_string()));
            }
        };

        // Children first, so the first error reported is the first one in
        // post-order.
        let args = self.render_children(node, depth)?;
        let fragment = template::fill(text, &args).ok_or_else(|| CompileError::ArityMismatch {
            operator: op.name().to_string(),
            expected: template::slot_count(text),
            found: args.len(),
        })?;

        trace!("Rendered {} -> {}", op, fragment);
        Ok(fragment)
    }

    fn render_children(&mut self, node: &FilterNode, depth: usize) -> Result<Vec<String>> {
        node.children
            .iter()
            .map(|child| self.render_at(child, depth + 1))
            .collect()
    }
}

/// Removes the enclosing quote pair of a string literal token.
///
/// The parser hands over string literals with their delimiters; anything else
/// is passed through untouched rather than sliced blindly.
fn strip_quotes(token: &str) -> &str {
    for quote in ['\'', '"'] {
        if token.len() >= 2
            && let Some(inner) = token
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }

    warn!("String literal without enclosing quotes: {}", token);
    token
}
