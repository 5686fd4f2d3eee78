//! Lexical layer: whitespace, comments, separators and tokens.
//!
//! There is no separate tokenizer. Every token parser consumes its own trailing blanks, in
//! one of two ways:
//!
//! - `lexeme` tokens only skip spaces and tabs, so whatever follows must be on the same line.
//! - `lineme` tokens skip [`separators`] as well (newlines, `#` comments, `;`), because they
//!   open a construct that may continue on the next line.

use crate::parser::combinators::{
    BoxedParser, char_range, end_of_input, many, none_of, one_of, scan, scan1, string,
};
use crate::parser::state::ParseState;
use crate::symbol::Symbol;

/// whitespace := [ \t]*
pub fn whitespace() -> BoxedParser<()> {
    scan(one_of(" \t")) >> |_| ()
}

/// newline := "\n" | "\r\n"
pub fn newline() -> BoxedParser<()> {
    (string("\n") | string("\r\n")) >> |_| ()
}

/// comment := "#" [^\n]* (newline | end of input)
pub fn comment() -> BoxedParser<()> {
    string("#") * scan(none_of("\n")) * (newline() | end_of_input())
}

/// separators := (whitespace (newline | comment | ";"))* whitespace
pub fn separators() -> BoxedParser<()> {
    let separator = newline() | comment() | (string(";") >> |_| ());
    many((whitespace() * separator).attempt()) * whitespace()
}

fn lexeme<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    parser - whitespace()
}

fn lineme<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    parser - separators()
}

fn digit() -> BoxedParser<char> {
    char_range('0', '9')
}

/// ident := [a-z] [a-z0-9_-]*
fn raw_ident() -> BoxedParser<String> {
    let ident_char = char_range('a', 'z') | one_of("-_") | digit();
    (char_range('a', 'z') + scan(ident_char)) >> |(first, rest): (char, String)| {
        let mut name = String::with_capacity(rest.len() + 1);
        name.push(first);
        name.push_str(&rest);
        name
    }
}

pub fn number() -> BoxedParser<String> {
    lexeme(scan1(digit())).label("number")
}

pub fn ident() -> BoxedParser<String> {
    lexeme(raw_ident()).label("ident")
}

/// Interns whatever name `parser` produced.
pub fn symbol(parser: BoxedParser<String>) -> BoxedParser<Symbol> {
    parser.map_state(|name, state: &mut ParseState<'_>| state.intern(&name))
}

/// `.name` as used by tags and tag patterns
pub fn tagged() -> BoxedParser<Symbol> {
    symbol(lexeme(string(".") * raw_ident().label("ident")))
}

/// `%name` as used by named patterns
pub fn check() -> BoxedParser<Symbol> {
    symbol(lexeme(string("%") * raw_ident().label("ident")))
}

// === Punctuation ===

pub fn rangle() -> BoxedParser<&'static str> {
    lineme(string(">"))
}

pub fn lparen() -> BoxedParser<&'static str> {
    lineme(string("("))
}

pub fn rparen() -> BoxedParser<&'static str> {
    lexeme(string(")"))
}

pub fn lbracket() -> BoxedParser<&'static str> {
    lineme(string("["))
}

pub fn rbracket() -> BoxedParser<&'static str> {
    lexeme(string("]"))
}

pub fn dollar() -> BoxedParser<&'static str> {
    lexeme(string("$"))
}

pub fn rarrow() -> BoxedParser<&'static str> {
    lineme(string("=>"))
}

pub fn plus() -> BoxedParser<&'static str> {
    lexeme(string("+"))
}

pub fn equal() -> BoxedParser<&'static str> {
    lexeme(string("="))
}

pub fn module_keyword() -> BoxedParser<&'static str> {
    lineme(string("@module"))
}
