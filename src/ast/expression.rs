use crate::symbol::Symbol;

use super::pattern::Pattern;

/// The expression tree.
///
/// Nodes are immutable once the parser has built them. Sequences that the grammar
/// collapses (`Apply`, `Chain`, `Let`) are never built with fewer elements than they need:
/// use [`Syntax::apply`], [`Syntax::chain`] and [`Syntax::with_bindings`], which return the
/// lone element unchanged instead of wrapping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Syntax {
    Var(Symbol),
    Int(u64),
    /// `f x y`: the first part is applied to the rest. Always two or more parts.
    Apply(Vec<Syntax>),
    /// `a > b > c`: pipeline stages in source order. Always two or more stages.
    Chain(Vec<Syntax>),
    Definition(Definition),
    Let(Let),
    /// `[p => e; q => f]`: the first clause whose pattern matches wins.
    Lam(Vec<Clause>),
    /// `[e]`: a one-argument lambda whose argument is `$` inside `e`.
    Autolam(Box<Syntax>),
    /// `$`
    Autovar,
    /// `.name`
    Tag(Symbol),
    Module(Module),
}

impl Syntax {
    /// Juxtaposition. A single part is returned as itself.
    pub fn apply(mut parts: Vec<Syntax>) -> Syntax {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Syntax::Apply(parts)
        }
    }

    /// Pipeline. A single stage is returned as itself.
    pub fn chain(mut stages: Vec<Syntax>) -> Syntax {
        if stages.len() == 1 {
            stages.remove(0)
        } else {
            Syntax::Chain(stages)
        }
    }

    /// Scopes `bindings` over `body`. No bindings means no `Let`.
    pub fn with_bindings(bindings: Vec<Definition>, body: Syntax) -> Syntax {
        if bindings.is_empty() {
            body
        } else {
            Syntax::Let(Let {
                bindings,
                body: Box::new(body),
            })
        }
    }

    pub fn autolam(body: Syntax) -> Syntax {
        Syntax::Autolam(Box::new(body))
    }
}

/// `+name params = body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: Symbol,
    pub params: Vec<Pattern>,
    pub body: Box<Syntax>,
}

impl Definition {
    pub fn new(name: Symbol, params: Vec<Pattern>, body: Syntax) -> Self {
        Self {
            name,
            params,
            body: Box::new(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Let {
    /// Never empty.
    pub bindings: Vec<Definition>,
    pub body: Box<Syntax>,
}

/// One `pattern => body` arm of a lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub pattern: Pattern,
    pub body: Syntax,
}

/// A named, optionally parameterized collection of definitions and sub-modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: Symbol,
    pub params: Vec<Pattern>,
    pub items: Vec<ModuleItem>,
}

impl Module {
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Definition(def) => Some(def),
            ModuleItem::Module(_) => None,
        })
    }

    pub fn submodules(&self) -> impl Iterator<Item = &Module> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Module(module) => Some(module),
            ModuleItem::Definition(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleItem {
    Definition(Definition),
    Module(Module),
}
