//! Parsed OData `$filter` trees as handed over by an external parser.

pub mod kind;
pub mod macros;
pub mod node;

pub use kind::NodeKind;
pub use node::FilterNode;
