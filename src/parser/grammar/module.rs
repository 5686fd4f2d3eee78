//! Module parsers for the tulip language

use crate::ast::{Module, ModuleItem};
use crate::parser::combinators::{BoxedParser, many, nested};
use crate::parser::state::{ParseState, Parser};

use super::expression::definition;
use super::lexical::{equal, ident, lbracket, module_keyword, rbracket, separators, symbol};
use super::pattern::patterns;

/// module_item := definition | module_decl
pub fn module_item() -> BoxedParser<ModuleItem> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        ((definition() >> ModuleItem::Definition) | (module_decl() >> ModuleItem::Module))
            .label("definition or module")
            .parse(state)
    })
}

/// module_decl := "@module" ident pattern* "=" "[" module_item* "]" separators
fn module_decl() -> BoxedParser<Module> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        module_keyword().parse(state)?;
        let name = symbol(ident()).parse(state)?;
        let params = patterns().parse(state)?;
        equal().parse(state)?;
        lbracket().parse(state)?;
        let items = nested("module", many(module_item())).parse(state)?;
        rbracket().parse(state)?;
        // `]` keeps to its line; sibling items may still follow on the next one
        separators().parse(state)?;
        Ok(Module {
            name,
            params,
            items,
        })
    })
}

/// bare_module := "@module" ident pattern* separators module_item*
///
/// The implicit top-level module of a file: no `=`, no brackets, items run to the end.
pub fn bare_module() -> BoxedParser<Module> {
    BoxedParser::new(|state: &mut ParseState<'_>| {
        module_keyword().parse(state)?;
        let name = symbol(ident()).parse(state)?;
        let params = patterns().parse(state)?;
        separators().parse(state)?;
        let items = many(module_item()).parse(state)?;
        Ok(Module {
            name,
            params,
            items,
        })
    })
}
