use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use tracing::trace;

use super::state::{ParseError, ParseResult, ParseState, Parser, describe};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState<'_>) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state: &mut ParseState<'_>| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState<'_>) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===
//
// A parser that fails after consuming input has committed: `or`, `many` and friends
// propagate that failure instead of trying something else. Only `attempt` turns a
// consuming failure back into a clean one.

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let a = self.parse(state)?;
            let b = other.parse(state)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let a = self.parse(state)?;
            let _ = other.parse(state)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let _ = self.parse(state)?;
            other.parse(state)
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Like `map`, but the transform sees the parse state (for interning).
    pub fn map_state<U: 'static, F: Fn(T, &mut ParseState<'_>) -> U + 'static>(
        self,
        f: F,
    ) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let a = self.parse(state)?;
            Ok(f(a, state))
        })
    }

    /// Choice: try self, if it fails without consuming input try other
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let start = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(err) if state.position() != start => Err(err),
                Err(err) => match other.parse(state) {
                    Ok(b) => Ok(b),
                    Err(other_err)
                        if state.position() == start && other_err.location == err.location =>
                    {
                        Err(err.merge(other_err))
                    }
                    Err(other_err) => Err(other_err),
                },
            }
        })
    }

    /// Speculative parse: on failure rewind to where we started, so an enclosing `or`
    /// may still try its next branch.
    pub fn attempt(self) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let start = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(err) => {
                    if state.position() != start {
                        trace!(from = state.position(), to = start, "rewinding speculative parse");
                        state.restore(start);
                    }
                    Err(err)
                }
            }
        })
    }

    /// Add a label to this parser for better error messages
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let start = state.position();
            match self.parse(state) {
                Ok(v) => Ok(v),
                // Only relabel failures that happened right where we started
                Err(err) if state.position() == start && err.location.offset == start => {
                    let mut relabeled = ParseError::new(err.location).expected(name);
                    relabeled.found = err.found;
                    Err(relabeled)
                }
                Err(err) => Err(err),
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Match `literal` exactly. Consumes nothing unless the whole literal matches.
pub fn string(literal: &'static str) -> BoxedParser<&'static str> {
    BoxedParser::new(move |state: &mut ParseState<'_>| {
        if state.looking_at(literal) {
            state.skip(literal.chars().count());
            Ok(literal)
        } else {
            Err(state.error_here(format!("'{literal}'")))
        }
    })
}

/// Low-level character parser with custom error - for internal use
fn satisfy<F: Fn(char) -> bool + 'static>(predicate: F, expected: String) -> BoxedParser<char> {
    BoxedParser::new(move |state: &mut ParseState<'_>| match state.peek() {
        Some(c) if predicate(c) => {
            state.advance();
            Ok(c)
        }
        _ => Err(state.error_here(expected.clone())),
    })
}

/// Any character in `lo..=hi`
pub fn char_range(lo: char, hi: char) -> BoxedParser<char> {
    satisfy(move |c| (lo..=hi).contains(&c), format!("'{lo}'..'{hi}'"))
}

/// Any character of `chars`
pub fn one_of(chars: &'static str) -> BoxedParser<char> {
    satisfy(
        move |c| chars.contains(c),
        format!("one of {}", describe_set(chars)),
    )
}

/// Any character not in `chars`, end of input excluded
pub fn none_of(chars: &'static str) -> BoxedParser<char> {
    satisfy(
        move |c| !chars.contains(c),
        format!("anything but {}", describe_set(chars)),
    )
}

fn describe_set(chars: &str) -> String {
    chars
        .chars()
        .map(|c| describe(Some(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Zero or more characters, collected into a string
pub fn scan(parser: BoxedParser<char>) -> BoxedParser<String> {
    many(parser) >> |chars: Vec<char>| chars.into_iter().collect::<String>()
}

/// One or more characters, collected into a string
pub fn scan1(parser: BoxedParser<char>) -> BoxedParser<String> {
    many1(parser) >> |chars: Vec<char>| chars.into_iter().collect::<String>()
}

/// Succeeds only when no input is left
pub fn end_of_input() -> BoxedParser<()> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        if state.has_next() {
            Err(state.error_here("end of input"))
        } else {
            Ok(())
        }
    })
}

/// Keep parsing into `results` until the parser fails without consuming input.
fn repeat<T>(
    parser: &BoxedParser<T>,
    state: &mut ParseState<'_>,
    results: &mut Vec<T>,
) -> ParseResult<()> {
    loop {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => {
                results.push(item);
                // A parser that matched nothing would match nothing forever
                if state.position() == pos {
                    return Ok(());
                }
            }
            Err(_) if state.position() == pos => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState<'_>| {
        let mut results = Vec::new();
        repeat(&parser, state, &mut results)?;
        Ok(results)
    })
}

/// Parse one or more occurrences
pub fn many1<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState<'_>| {
        let first = parser.parse(state)?;
        let mut results = vec![first];
        repeat(&parser, state, &mut results)?;
        Ok(results)
    })
}

/// Run `parser` one nesting level down. Used right after an opening token, so running
/// out of depth is a committed failure.
pub fn nested<T: 'static>(what: &'static str, parser: BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState<'_>| {
        state.descend(what)?;
        let result = parser.parse(state);
        state.ascend();
        result
    })
}
