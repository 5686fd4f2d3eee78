//! Expression parsers for the tulip language

use crate::ast::{Definition, Syntax};
use crate::parser::combinators::{BoxedParser, many, many1, nested};
use crate::parser::state::{ParseError, ParseState, Parser};

use super::lambda::lambda;
use super::lexical::{
    dollar, equal, ident, lparen, number, plus, rangle, rparen, separators, symbol, tagged,
};
use super::pattern::patterns;

fn var() -> BoxedParser<Syntax> {
    symbol(ident()) >> Syntax::Var
}

/// Decimal literal. Digits that overflow `u64` are a committed failure.
fn int() -> BoxedParser<Syntax> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        let location = state.location();
        let digits = number().parse(state)?;
        digits.parse::<u64>().map(Syntax::Int).map_err(|_| {
            ParseError::new(location)
                .expected("number within range")
                .found(format!("'{digits}'"))
        })
    })
}

/// paren := "(" expr ")"
fn paren() -> BoxedParser<Syntax> {
    lparen() * nested("expression", expr()) - rparen()
}

fn tag() -> BoxedParser<Syntax> {
    tagged() >> Syntax::Tag
}

fn autovar() -> BoxedParser<Syntax> {
    dollar() >> |_| Syntax::Autovar
}

/// atom := var | int | paren | lambda | tag | autovar
pub fn atom() -> BoxedParser<Syntax> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        (var() | int() | paren() | lambda() | tag() | autovar())
            .label("expression")
            .parse(state)
    })
}

/// apply := atom+
pub fn apply() -> BoxedParser<Syntax> {
    many1(atom()) >> Syntax::apply
}

/// chain := apply separators (">" apply separators)*
///
/// Every stage may be followed by line breaks, so `>` can start a continuation line.
pub fn chain() -> BoxedParser<Syntax> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        let first = apply().parse(state)?;
        separators().parse(state)?;
        let rest = many(rangle() * apply() - separators()).parse(state)?;

        let mut stages = Vec::with_capacity(rest.len() + 1);
        stages.push(first);
        stages.extend(rest);
        Ok(Syntax::chain(stages))
    })
}

/// definition := "+" ident pattern* "=" expr
pub fn definition() -> BoxedParser<Definition> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        plus().parse(state)?;
        let name = symbol(ident()).parse(state)?;
        let params = patterns().parse(state)?;
        equal().parse(state)?;
        let body = nested("expression", expr()).parse(state)?;
        Ok(Definition::new(name, params, body))
    })
}

/// expr := definition* chain
pub fn expr() -> BoxedParser<Syntax> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        let bindings = many(definition()).parse(state)?;
        let body = chain().parse(state)?;
        Ok(Syntax::with_bindings(bindings, body))
    })
}
