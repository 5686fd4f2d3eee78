//! Symbol interning
//!
//! Every identifier the parser recognizes goes through an [`Interner`] before it is stored
//! in the tree. Two symbols produced by the same interner are equal exactly when their
//! names are equal, and that equality is checked by address rather than by content.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Append-only table of every symbol seen so far.
#[derive(Debug, Default)]
pub struct Interner(HashSet<Symbol>);

impl Interner {
    pub fn new() -> Interner {
        Interner(HashSet::new())
    }

    /// Maps a name to its canonical symbol, creating it on first sight.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(sym) = self.0.get(name) {
            sym.clone()
        } else {
            let sym = Symbol(Rc::from(name));
            self.0.insert(sym.clone());
            sym
        }
    }

    /// Looks a name up without inserting it.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.0.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An immutable name that is unique within its interner, so it can be compared by address.
#[derive(Debug, Clone)]
pub struct Symbol(Rc<str>);

impl Symbol {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_from_string() {
        let mut reg = Interner::new();
        let sym = reg.intern("foo");
        assert_eq!(sym.name(), "foo");
        assert_eq!(sym.to_string(), "foo");
    }

    #[test]
    fn symbols_with_same_name_are_equal() {
        let mut reg = Interner::new();
        let sym1 = reg.intern("foo");
        let sym2 = reg.intern("foo");
        assert_eq!(sym1, sym2);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn symbols_with_different_names_are_different() {
        let mut reg = Interner::new();
        let sym1 = reg.intern("foo");
        let sym2 = reg.intern("bar");
        assert_ne!(sym1, sym2);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn symbols_from_different_interners_are_distinct() {
        let mut a = Interner::new();
        let mut b = Interner::new();
        assert_ne!(a.intern("foo"), b.intern("foo"));
    }

    #[test]
    fn get_does_not_insert() {
        let mut reg = Interner::new();
        assert!(reg.get("foo").is_none());
        assert!(reg.is_empty());
        let sym = reg.intern("foo");
        assert_eq!(reg.get("foo"), Some(sym));
    }
}
