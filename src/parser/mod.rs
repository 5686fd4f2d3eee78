//! Scannerless recursive-descent parser built from combinators.
//!
//! [`state`] holds the cursor and the failure type, [`combinators`] the generic building
//! blocks, and [`grammar`] the productions of the language itself.

pub mod combinators;
pub mod grammar;
pub mod state;

pub use combinators::BoxedParser;
pub use grammar::{expression_parser, module_parser};
pub use state::{MAX_DEPTH, ParseError, ParseResult, ParseState, Parser};
