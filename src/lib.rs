//! # Tulip - front end for the tulip language
//!
//! This crate turns tulip source text into a syntax tree. It stops there: nothing is
//! evaluated, type checked or compiled.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Source] → characters + line table
//!     ↓
//! [Parser] → Syntax tree (ast::Syntax / ast::Module)
//!     ↓
//! [fmt] → S-expression dump or tulip source
//! ```
//!
//! There is no separate token stream. The grammar is written with parser combinators
//! directly over characters, and each token parser consumes the whitespace after it. Which
//! tokens may also be followed by a line break is part of the grammar: `>`, `(`, `[`, `=>`
//! and `@module` are, everything else is not.
//!
//! ## Symbols
//!
//! Identifiers, tag names and check names are interned. A [`Session`] owns the table, so
//! two parses in the same session produce identical [`Symbol`]s for equal names, and trees
//! from the same session can be compared with `==`.
//!
//! ## Module Structure
//!
//! - [`source`] - Source text and line/column lookup
//! - [`symbol`] - Interned names
//! - [`ast`] - Syntax tree definitions
//! - [`parser`] - Combinators, lexical layer and grammar
//! - [`fmt`] - Tree dump and source printer
//! - [`session`] - Parsing entry points
//! - [`driver`] - File mode and interactive prompt
//!
//! ## Example
//!
//! ```
//! let tree = tulip::parse_expression("xs > map [x => x] > sum").unwrap();
//! assert_eq!(tree.to_string(), "(chain xs (apply map (lam (x => x))) sum)");
//! ```

pub mod ast;
pub mod driver;
pub mod error;
pub mod fmt;
pub mod parser;
pub mod session;
pub mod source;
pub mod symbol;

pub use error::{Error, Result};
pub use session::{Session, parse_expression, parse_module};
pub use source::Source;
pub use symbol::{Interner, Symbol};
