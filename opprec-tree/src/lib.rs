//! # opprec tree assembly
//!
//! The tree-building back end of an operator-precedence expression parser.
//! A driver that has already decided operator order feeds values and operator
//! applications into a [`TreeBuilder`]; the builder keeps them on an operand
//! stack and rewrites variadic constructs into flat n-ary nodes as it goes:
//!
//! - comma chains `a, b, c` become one list
//! - `f(a, b)` becomes `(call f a b)`
//! - `obj.m(a, b)` becomes `(callm obj m a b)`
//! - `t[i, j]` becomes `(index t i j)`
//! - `[a, b, c]` becomes `(array a b c)`
//!
//! ## Example
//!
//! ```
//! use opprec_tree::{OperatorDescriptor, Tag, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! builder.push_value("target");
//! builder.push_value("i");
//! builder.push_value("j");
//! builder.apply_operator(&OperatorDescriptor::binary(Tag::Comma)).unwrap();
//! builder.apply_operator(&OperatorDescriptor::binary(Tag::Array).with_minarity(1)).unwrap();
//! builder.apply_operator(&OperatorDescriptor::binary(Tag::Index).with_minarity(1)).unwrap();
//!
//! let tree = builder.extract_result().unwrap();
//! assert_eq!(tree.to_string(), "(index target i j)");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod flatten;
pub mod rewrite;
pub mod script;
pub mod stack;
pub mod tree;

#[cfg(test)]
mod tests;

// Re-export key types
pub use builder::{assemble, Event, TreeBuilder};
pub use config::{Config, ConfigError, OperatorShape, OperatorTable, BUILTIN_ALIASES, BUILTIN_OPERATORS};
pub use error::{AssembleError, Result};
pub use flatten::{flatten, flatten_list};
pub use rewrite::{rewrite, Operand, Rule};
pub use script::{assemble_script, parse_script, resolve_script, OperatorRef, ScriptError, ScriptEvent};
pub use stack::OperandStack;
pub use tree::{Node, Tree};

// Re-export shared types from opprec-types
pub use opprec_types::{OperatorDescriptor, Tag, Value};
