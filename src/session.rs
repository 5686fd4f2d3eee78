//! Parsing sessions
//!
//! A [`Session`] owns the symbol table. Every parse run through the same session interns
//! into the same table, so equal names in different inputs become the same [`Symbol`].

use std::path::Path;

use tracing::debug;

use crate::ast::{Module, Syntax};
use crate::error::{Error, Result};
use crate::parser::{BoxedParser, ParseResult, ParseState, Parser, expression_parser, module_parser};
use crate::source::Source;
use crate::symbol::{Interner, Symbol};

#[derive(Debug, Default)]
pub struct Session {
    interner: Interner,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    /// Parse one expression, optionally surrounded by blank lines and comments.
    pub fn parse_expression(&mut self, source: &Source) -> ParseResult<Syntax> {
        self.run(source, expression_parser())
    }

    /// Parse a whole source as its implicit top-level module.
    pub fn parse_module(&mut self, source: &Source) -> ParseResult<Module> {
        self.run(source, module_parser())
    }

    /// Read and parse a module file.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<Module> {
        let path = path.as_ref();
        let source = Source::from_file(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_module(&source)?)
    }

    fn run<T>(&mut self, source: &Source, parser: BoxedParser<T>) -> ParseResult<T> {
        debug!(source = source.name(), chars = source.len(), "parsing");

        let mut state = ParseState::new(source, std::mem::take(&mut self.interner));
        let result = parser.parse(&mut state);
        self.interner = state.into_interner();

        match &result {
            Ok(_) => debug!(symbols = self.interner.len(), "parse succeeded"),
            Err(err) => debug!(%err, "parse failed"),
        }
        result
    }
}

/// Parse one expression with a throwaway session.
pub fn parse_expression(input: &str) -> ParseResult<Syntax> {
    Session::new().parse_expression(&Source::from_string(input))
}

/// Parse a module with a throwaway session.
pub fn parse_module(input: &str) -> ParseResult<Module> {
    Session::new().parse_module(&Source::from_string(input))
}
