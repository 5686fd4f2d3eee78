use std::fmt;

use crate::source::{Location, Source};
use crate::symbol::{Interner, Symbol};

/// A located parse failure: where it happened, what would have been accepted there, and
/// what was found instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub location: Location,
    pub expected: Vec<String>,
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            expected: vec![],
            found: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        let what = what.into();
        if !self.expected.contains(&what) {
            self.expected.push(what);
        }
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    /// Combines the expectations of two failures at the same spot.
    pub fn merge(mut self, other: ParseError) -> Self {
        for what in other.expected {
            if !self.expected.contains(&what) {
                self.expected.push(what);
            }
        }
        self.found = self.found.or(other.found);
        self
    }

    /// Renders the failure with the offending source line and a caret under the column.
    pub fn report(&self, source: &Source) -> String {
        let line_no = self.location.line.to_string();
        let gutter = " ".repeat(line_no.len());
        let caret = " ".repeat(self.location.column.saturating_sub(1));

        format!(
            "error: {}\n{gutter}--> {}:{}\n{gutter} |\n{line_no} | {}\n{gutter} | {caret}^",
            self.message(),
            source.name(),
            self.location,
            source.line_text(self.location.line),
        )
    }

    fn message(&self) -> String {
        let mut msg = match self.expected.as_slice() {
            [] => "unexpected input".to_string(),
            [only] => format!("expected {only}"),
            [init @ .., last] => format!("expected {} or {}", init.join(", "), last),
        };
        if let Some(found) = &self.found {
            msg.push_str(", found ");
            msg.push_str(found);
        }
        msg
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message())
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Cursor over the source characters, plus the symbol table identifiers are interned into.
///
/// Backtracking is done by saving [`ParseState::position`] and handing it back to
/// [`ParseState::restore`]. Interning is the only other effect a parser has, and it is
/// idempotent, so restoring the position undoes everything observable.
pub struct ParseState<'a> {
    source: &'a Source,
    index: usize,
    depth: usize,
    interner: Interner,
}

/// How many brackets, parentheses, definition bodies and tag patterns may enclose one
/// another before the input is rejected.
pub const MAX_DEPTH: usize = 128;

impl<'a> ParseState<'a> {
    pub fn new(source: &'a Source, interner: Interner) -> Self {
        Self {
            source,
            index: 0,
            depth: 0,
            interner,
        }
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        Some(c)
    }

    pub fn peek(&self) -> Option<char> {
        self.source.chars().get(self.index).copied()
    }

    /// True when the upcoming characters are exactly `literal`.
    pub fn looking_at(&self, literal: &str) -> bool {
        let rest = &self.source.chars()[self.index..];
        let mut count = 0;
        for (expected, actual) in literal.chars().zip(rest) {
            if expected != *actual {
                return false;
            }
            count += 1;
        }
        count == literal.chars().count()
    }

    pub fn skip(&mut self, count: usize) {
        self.index = (self.index + count).min(self.source.len());
    }

    pub fn has_next(&self) -> bool {
        self.index < self.source.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    pub fn location(&self) -> Location {
        self.source.location(self.index)
    }

    /// A failure at the cursor, with `found` describing the next character.
    pub fn error_here(&self, expected: impl Into<String>) -> ParseError {
        ParseError::new(self.location())
            .expected(expected)
            .found(describe(self.peek()))
    }

    /// Enter one more level of nesting, failing at the cursor once [`MAX_DEPTH`] is reached.
    pub fn descend(&mut self, what: &str) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_here(format!("less deeply nested {what}")));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    pub fn into_interner(self) -> Interner {
        self.interner
    }
}

/// Human-readable name for the character at the cursor.
pub fn describe(c: Option<char>) -> String {
    match c {
        None => "end of input".to_string(),
        Some('\n') => "newline".to_string(),
        Some('\r') => "carriage return".to_string(),
        Some('\t') => "tab".to_string(),
        Some(c) => format!("'{c}'"),
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState<'_>) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState<'_>) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState<'_>) -> ParseResult<T> {
        self(state)
    }
}
