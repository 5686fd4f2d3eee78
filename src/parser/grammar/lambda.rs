//! Lambda parsers for the tulip language
//!
//! A `[` opens either a clause lambda (`[.some x => x; .none => 0]`) or an auto-lambda
//! (`[f $ 1]`). The two cannot be told apart by their first token, because a pattern looks
//! just like the start of an expression. The clause form is therefore parsed
//! speculatively; only when it cannot reach its closing `]` is the input re-read as an
//! auto-lambda.

use crate::ast::{Clause, Syntax};
use crate::parser::combinators::{BoxedParser, many1, nested};
use crate::parser::state::{ParseState, Parser};

use super::expression::expr;
use super::lexical::{lbracket, rarrow, rbracket, separators};
use super::pattern::pattern;

/// clause := pattern separators "=>" expr
fn clause() -> BoxedParser<Clause> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        let pattern = pattern().parse(state)?;
        separators().parse(state)?;
        rarrow().parse(state)?;
        let body = expr().parse(state)?;
        Ok(Clause { pattern, body })
    })
}

/// clauses := clause+ "]"
fn clauses() -> BoxedParser<Syntax> {
    many1(clause()) - rbracket() >> Syntax::Lam
}

/// auto := expr "]"
fn auto() -> BoxedParser<Syntax> {
    expr() - rbracket() >> Syntax::autolam
}

/// lambda := "[" (clauses | auto)
///
/// The clause form must be tried first; it decides which programs are accepted.
pub fn lambda() -> BoxedParser<Syntax> {
    lbracket() * nested("expression", clauses().attempt() | auto())
}
