//! Grammar module for the tulip language
//!
//! The rules are organized by layer, leaves first:
//! - `lexical`: whitespace, comments, separators, identifiers, numbers, punctuation
//! - `pattern`: destructuring patterns
//! - `expression`: atoms, application, chains, definitions and `let`
//! - `lambda`: clause lambdas and auto-lambdas
//! - `module`: nested and top-level modules
//!
//! This file holds the two entry points.

mod expression;
mod lambda;
mod lexical;
mod module;
mod pattern;

use crate::ast::{Module, Syntax};

use super::combinators::{BoxedParser, end_of_input};

pub use expression::{apply, atom, chain, definition, expr};
pub use lambda::lambda;
pub use lexical::{comment, ident, number, separators, whitespace};
pub use module::{bare_module, module_item};
pub use pattern::{pattern, patterns};

/// separators expr <end of input>
pub fn expression_parser() -> BoxedParser<Syntax> {
    separators() * expr() - end_of_input()
}

/// separators bare_module <end of input>
pub fn module_parser() -> BoxedParser<Module> {
    separators() * bare_module() - end_of_input()
}

