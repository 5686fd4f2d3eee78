//! Pattern parsers for the tulip language

use crate::ast::Pattern;
use crate::parser::combinators::{BoxedParser, many, nested};
use crate::parser::state::{ParseState, Parser};

use super::lexical::{check, ident, lparen, rparen, symbol, tagged};

/// var_pattern := ident
fn var_pattern() -> BoxedParser<Pattern> {
    symbol(ident()) >> Pattern::Var
}

/// tag_pattern := "." ident pattern*
fn tag_pattern() -> BoxedParser<Pattern> {
    (tagged() + nested("pattern", many(pattern()))).map(|(tag, args)| Pattern::Tag { tag, args })
}

/// named_pattern := "%" ident
fn named_pattern() -> BoxedParser<Pattern> {
    check() >> Pattern::Named
}

/// paren_pattern := "(" pattern ")"
///
/// Grouping only: yields the inner pattern itself.
fn paren_pattern() -> BoxedParser<Pattern> {
    lparen() * nested("pattern", pattern()) - rparen()
}

/// pattern := var_pattern | tag_pattern | named_pattern | paren_pattern
///
/// Every alternative has its own leading token, so the first one that gets going wins.
pub fn pattern() -> BoxedParser<Pattern> {
    // Built on demand: tag and paren patterns refer back to `pattern`
    BoxedParser::new(|state: &mut ParseState<'_>| {
        (var_pattern() | tag_pattern() | named_pattern() | paren_pattern())
            .label("pattern")
            .parse(state)
    })
}

/// patterns := pattern*
pub fn patterns() -> BoxedParser<Vec<Pattern>> {
    many(pattern())
}
