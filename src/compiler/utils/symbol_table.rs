use rustc_hash::FxHashSet;
use std::rc::Rc;

#[repr(transparent)]
#[derive(Debug, Eq, Hash, Clone, PartialEq)]
pub struct Interned(Rc<str>);

impl Interned {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Names of every symbol the lexer has seen.
///
/// The table is owned by the caller and only ever grows while lexing, so it
/// can be carried across several sources.
#[repr(transparent)]
#[derive(Debug)]
pub struct SymbolTable {
    implementation: FxHashSet<Rc<str>>,
}

impl Default for SymbolTable {
    fn default() -> SymbolTable {
        SymbolTable {
            implementation: FxHashSet::default(),
        }
    }
}

impl SymbolTable {
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .implementation
            .iter()
            .map(|e| e.to_string())
            .collect();
        names.sort();
        names
    }

    pub fn get_or_intern(&mut self, v: &str) -> Interned {
        if let Some(existing) = self.implementation.get(v) {
            Interned(existing.clone())
        } else {
            let e: Rc<str> = Rc::from(v);
            self.implementation.insert(e.clone());
            Interned(e)
        }
    }

    pub fn contains(&self, v: &str) -> bool {
        self.implementation.contains(v)
    }

    pub fn len(&self) -> usize {
        self.implementation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implementation.is_empty()
    }

    pub fn absorb(&mut self, other: &SymbolTable) {
        if std::ptr::eq(self, other) {
            return;
        }

        for name in other.implementation.iter() {
            self.get_or_intern(name);
        }
    }
}

impl From<&Vec<String>> for SymbolTable {
    fn from(names: &Vec<String>) -> SymbolTable {
        let mut table = SymbolTable::default();
        for s in names {
            table.get_or_intern(s);
        }

        table
    }
}
