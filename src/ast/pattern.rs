//! # Pattern AST Nodes
//!
//! Patterns destructure values. They appear in three places:
//!
//! - **Lambda clauses**: `[.some x => x; .none => 0]`
//! - **Definition parameters**: `+unwrap (.some x) = x`
//! - **Module parameters**: `@module list %eq = [...]`
//!
//! ## Pattern Forms
//!
//! ```text
//! x             Pattern::Var        binds anything
//! .cons h t     Pattern::Tag        matches a tagged value, destructures its payload
//! %eq           Pattern::Named      guard naming an external check
//! (p)           (grouping only)     parses to `p` itself, no wrapper node
//! ```
//!
//! Arity of a tag pattern is not checked here; that belongs to whatever evaluates the tree.

use crate::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Binds any value to `name`.
    Var(Symbol),
    /// Matches values tagged `tag`; `args` destructure the payload positionally.
    Tag { tag: Symbol, args: Vec<Pattern> },
    /// Names a predicate the value must satisfy. Only the name is recorded.
    Named(Symbol),
}

impl Pattern {
    /// Symbols this pattern binds, in source order. Named checks bind nothing.
    pub fn bound_names(&self) -> Vec<&Symbol> {
        let mut names = Vec::new();
        self.collect_bound(&mut names);
        names
    }

    fn collect_bound<'a>(&'a self, out: &mut Vec<&'a Symbol>) {
        match self {
            Pattern::Var(name) => out.push(name),
            Pattern::Tag { args, .. } => args.iter().for_each(|arg| arg.collect_bound(out)),
            Pattern::Named(_) => {}
        }
    }
}
