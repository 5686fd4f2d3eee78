//! Pretty printer for tulip source code
//!
//! Renders trees back into source syntax. For any tree the parser can produce, parsing the
//! output again yields an equal tree: groupings are parenthesized where the grammar would
//! otherwise read them differently, and bindings and clauses are separated with `;` so they
//! fit on one line.

use crate::ast::{Clause, Definition, Module, ModuleItem, Pattern, Syntax};

use super::Formatter;

pub trait ToSource {
    fn to_source(&self) -> String;
}

impl ToSource for Syntax {
    fn to_source(&self) -> String {
        let mut formatter = Formatter::new();
        format_syntax(self, &mut formatter, Level::Expr);
        formatter.finish()
    }
}

impl ToSource for Pattern {
    fn to_source(&self) -> String {
        let mut formatter = Formatter::new();
        format_pattern(self, &mut formatter, false);
        formatter.finish()
    }
}

impl ToSource for Definition {
    fn to_source(&self) -> String {
        let mut formatter = Formatter::new();
        format_definition(self, &mut formatter);
        formatter.finish()
    }
}

/// Modules print as a file would be written: a bare `@module` header, then one item per line.
impl ToSource for Module {
    fn to_source(&self) -> String {
        let mut formatter = Formatter::new();
        formatter.write_str("@module ");
        formatter.write_str(self.name.name());
        format_params(&self.params, &mut formatter);
        formatter.write_newline();

        for item in &self.items {
            format_module_item(item, &mut formatter);
            formatter.write_newline();
        }

        formatter.finish()
    }
}

/// Grammar level a position accepts, loosest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Atom,
    Stage,
    Chain,
    Expr,
}

fn level_of(syntax: &Syntax) -> Level {
    match syntax {
        Syntax::Apply(_) => Level::Stage,
        Syntax::Chain(_) => Level::Chain,
        Syntax::Let(_) | Syntax::Definition(_) | Syntax::Module(_) => Level::Expr,
        _ => Level::Atom,
    }
}

fn format_syntax(syntax: &Syntax, fmt: &mut Formatter, allowed: Level) {
    if level_of(syntax) > allowed {
        fmt.write_str("(");
        format_syntax(syntax, fmt, Level::Expr);
        fmt.write_str(")");
        return;
    }

    match syntax {
        Syntax::Var(name) => fmt.write_str(name.name()),
        Syntax::Int(value) => fmt.write_str(&value.to_string()),
        Syntax::Apply(parts) => {
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    fmt.write_str(" ");
                }
                format_syntax(part, fmt, Level::Atom);
            }
        }
        Syntax::Chain(stages) => {
            for (i, stage) in stages.iter().enumerate() {
                if i > 0 {
                    fmt.write_str(" > ");
                }
                format_syntax(stage, fmt, Level::Stage);
            }
        }
        Syntax::Definition(def) => format_definition(def, fmt),
        Syntax::Let(binding) => {
            for def in &binding.bindings {
                format_definition(def, fmt);
                fmt.write_str("; ");
            }
            format_syntax(&binding.body, fmt, Level::Chain);
        }
        Syntax::Lam(clauses) => {
            fmt.write_str("[");
            for (i, clause) in clauses.iter().enumerate() {
                if i > 0 {
                    fmt.write_str("; ");
                }
                format_clause(clause, fmt);
            }
            fmt.write_str("]");
        }
        Syntax::Autolam(body) => {
            fmt.write_str("[");
            format_syntax(body, fmt, Level::Expr);
            fmt.write_str("]");
        }
        Syntax::Autovar => fmt.write_str("$"),
        Syntax::Tag(name) => {
            fmt.write_str(".");
            fmt.write_str(name.name());
        }
        Syntax::Module(module) => format_module_decl(module, fmt),
    }
}

fn format_clause(clause: &Clause, fmt: &mut Formatter) {
    format_pattern(&clause.pattern, fmt, false);
    fmt.write_str(" => ");
    format_syntax(&clause.body, fmt, Level::Expr);
}

fn format_definition(def: &Definition, fmt: &mut Formatter) {
    fmt.write_str("+");
    fmt.write_str(def.name.name());
    format_params(&def.params, fmt);
    fmt.write_str(" = ");
    format_syntax(&def.body, fmt, Level::Expr);
}

fn format_params(params: &[Pattern], fmt: &mut Formatter) {
    for param in params {
        fmt.write_str(" ");
        format_pattern(param, fmt, true);
    }
}

/// Tag patterns soak up every pattern after them, so as arguments they get parentheses.
fn format_pattern(pattern: &Pattern, fmt: &mut Formatter, as_argument: bool) {
    match pattern {
        Pattern::Var(name) => fmt.write_str(name.name()),
        Pattern::Tag { tag, args } => {
            if as_argument {
                fmt.write_str("(");
            }
            fmt.write_str(".");
            fmt.write_str(tag.name());
            for arg in args {
                fmt.write_str(" ");
                format_pattern(arg, fmt, true);
            }
            if as_argument {
                fmt.write_str(")");
            }
        }
        Pattern::Named(check) => {
            fmt.write_str("%");
            fmt.write_str(check.name());
        }
    }
}

fn format_module_item(item: &ModuleItem, fmt: &mut Formatter) {
    fmt.write_indent();
    match item {
        ModuleItem::Definition(def) => format_definition(def, fmt),
        ModuleItem::Module(module) => format_module_decl(module, fmt),
    }
}

/// @module name params = [
///   items
/// ]
fn format_module_decl(module: &Module, fmt: &mut Formatter) {
    fmt.write_str("@module ");
    fmt.write_str(module.name.name());
    format_params(&module.params, fmt);
    fmt.write_str(" = [");
    fmt.write_newline();

    fmt.indent();
    for item in &module.items {
        format_module_item(item, fmt);
        fmt.write_newline();
    }
    fmt.dedent();

    fmt.write_indent();
    fmt.write_str("]");
}
