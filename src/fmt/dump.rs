//! S-expression dump of the syntax tree
//!
//! ```text
//! x                       Var
//! 42                      Int
//! (apply f x)             Apply
//! (chain a b)             Chain
//! (def f (x) body)        Definition
//! (let ((def x () 1)) x)  Let
//! (lam (n => n))          Lam
//! (autolam $)             Autolam / Autovar
//! .none                   Tag
//! (module m () ...)       Module, one item per line
//! ```
//!
//! Patterns: `x`, `.nil`, `(.cons h t)`, `%eq`.

use std::fmt::{self, Display};

use crate::ast::{Clause, Definition, Module, ModuleItem, Pattern, Syntax};

use super::Formatter;

impl Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        dump_syntax(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        dump_pattern(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        dump_definition(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        dump_clause(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        dump_module(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for ModuleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleItem::Definition(def) => Display::fmt(def, f),
            ModuleItem::Module(module) => Display::fmt(module, f),
        }
    }
}

fn dump_syntax(syntax: &Syntax, fmt: &mut Formatter) {
    match syntax {
        Syntax::Var(name) => fmt.write_str(name.name()),
        Syntax::Int(value) => fmt.write_str(&value.to_string()),
        Syntax::Apply(parts) => dump_list("apply", parts, fmt),
        Syntax::Chain(stages) => dump_list("chain", stages, fmt),
        Syntax::Definition(def) => dump_definition(def, fmt),
        Syntax::Let(binding) => {
            fmt.write_str("(let (");
            for (i, def) in binding.bindings.iter().enumerate() {
                if i > 0 {
                    fmt.write_str(" ");
                }
                dump_definition(def, fmt);
            }
            fmt.write_str(") ");
            dump_syntax(&binding.body, fmt);
            fmt.write_str(")");
        }
        Syntax::Lam(clauses) => {
            fmt.write_str("(lam");
            for clause in clauses {
                fmt.write_str(" ");
                dump_clause(clause, fmt);
            }
            fmt.write_str(")");
        }
        Syntax::Autolam(body) => {
            fmt.write_str("(autolam ");
            dump_syntax(body, fmt);
            fmt.write_str(")");
        }
        Syntax::Autovar => fmt.write_str("$"),
        Syntax::Tag(name) => {
            fmt.write_str(".");
            fmt.write_str(name.name());
        }
        Syntax::Module(module) => dump_module(module, fmt),
    }
}

fn dump_list(head: &str, items: &[Syntax], fmt: &mut Formatter) {
    fmt.write_str("(");
    fmt.write_str(head);
    for item in items {
        fmt.write_str(" ");
        dump_syntax(item, fmt);
    }
    fmt.write_str(")");
}

fn dump_clause(clause: &Clause, fmt: &mut Formatter) {
    fmt.write_str("(");
    dump_pattern(&clause.pattern, fmt);
    fmt.write_str(" => ");
    dump_syntax(&clause.body, fmt);
    fmt.write_str(")");
}

fn dump_definition(def: &Definition, fmt: &mut Formatter) {
    fmt.write_str("(def ");
    fmt.write_str(def.name.name());
    fmt.write_str(" ");
    dump_params(&def.params, fmt);
    fmt.write_str(" ");
    dump_syntax(&def.body, fmt);
    fmt.write_str(")");
}

fn dump_params(params: &[Pattern], fmt: &mut Formatter) {
    fmt.write_str("(");
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            fmt.write_str(" ");
        }
        dump_pattern(param, fmt);
    }
    fmt.write_str(")");
}

fn dump_pattern(pattern: &Pattern, fmt: &mut Formatter) {
    match pattern {
        Pattern::Var(name) => fmt.write_str(name.name()),
        Pattern::Tag { tag, args } if args.is_empty() => {
            fmt.write_str(".");
            fmt.write_str(tag.name());
        }
        Pattern::Tag { tag, args } => {
            fmt.write_str("(.");
            fmt.write_str(tag.name());
            for arg in args {
                fmt.write_str(" ");
                dump_pattern(arg, fmt);
            }
            fmt.write_str(")");
        }
        Pattern::Named(check) => {
            fmt.write_str("%");
            fmt.write_str(check.name());
        }
    }
}

fn dump_module(module: &Module, fmt: &mut Formatter) {
    fmt.write_str("(module ");
    fmt.write_str(module.name.name());
    fmt.write_str(" ");
    dump_params(&module.params, fmt);

    fmt.indent();
    for item in &module.items {
        fmt.write_newline();
        fmt.write_indent();
        match item {
            ModuleItem::Definition(def) => dump_definition(def, fmt),
            ModuleItem::Module(inner) => dump_module(inner, fmt),
        }
    }
    fmt.dedent();

    fmt.write_str(")");
}
