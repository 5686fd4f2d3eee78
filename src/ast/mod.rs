//! Syntax tree produced by the parser.
//!
//! The tree is strictly hierarchical: every node is owned by its parent and the root is
//! owned by whoever called the parser.

pub mod expression;
pub mod pattern;

pub use expression::{Clause, Definition, Let, Module, ModuleItem, Syntax};
pub use pattern::Pattern;
