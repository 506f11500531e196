use crate::{error::Result, options::CompileOptions, renderer::Renderer};
use filter_model::{FilterNode, NodeKind};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Compiled MongoDB query text for one filter (sub)tree.
///
/// This is a fragment, not a complete query document: the executor supplies
/// the enclosing filter wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A literal pulled out of the fragment in bind mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundValue {
    pub kind: NodeKind,
    /// Token text; string literals without their quotes.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledFilter {
    pub fragment: Fragment,
    /// Values for `@p1`, `@p2`, ... in order. Empty in inline mode.
    pub params: Vec<BoundValue>,
}

/// Stateless filter compiler. One instance can be shared across threads and
/// used for any number of trees.
#[derive(Debug, Clone, Default)]
pub struct FilterCompiler {
    options: CompileOptions,
}

impl FilterCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles the tree into a fragment.
    ///
    /// In bind mode the fragment contains placeholders and the values are
    /// dropped; use [`FilterCompiler::compile_bound`] to keep them.
    pub fn compile(&self, root: &FilterNode) -> Result<Fragment> {
        self.compile_bound(root).map(|compiled| compiled.fragment)
    }

    pub fn compile_bound(&self, root: &FilterNode) -> Result<CompiledFilter> {
        let mut renderer = Renderer::new(&self.options);
        let text = renderer.render(root).inspect_err(|err| {
            debug!("Filter compilation failed: {}", err);
        })?;
        let params = renderer.finish();

        debug!(
            "Compiled filter ({} bound parameter(s)): {}",
            params.len(),
            text
        );

        Ok(CompiledFilter {
            fragment: Fragment(text),
            params,
        })
    }
}
