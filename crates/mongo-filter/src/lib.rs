//! Compiles parsed OData `$filter` trees into MongoDB query fragments.

use filter_model::FilterNode;

pub mod compiler;
pub mod error;
pub mod operator;
pub mod options;
pub mod renderer;
pub mod template;

pub use compiler::{BoundValue, CompiledFilter, FilterCompiler, Fragment};
pub use error::{CompileError, Result};
pub use operator::Operator;
pub use options::{CompileOptions, LiteralMode};
pub use template::Template;

/// Compiles `root` with default options: literals inline, no depth limit.
pub fn compile(root: &FilterNode) -> Result<Fragment> {
    FilterCompiler::default().compile(root)
}

/// Compiles `root` with every literal replaced by a bound parameter.
pub fn compile_bound(root: &FilterNode) -> Result<CompiledFilter> {
    FilterCompiler::new(CompileOptions::bind()).compile_bound(root)
}
