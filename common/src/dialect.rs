//! Target dialect queries

use crate::{intern::InternedString, HashSet};

/// Properties of the target dialect consumed by optimisation passes
pub trait Dialect {
    /// Whether `name` refers to a dialect intrinsic rather than a user
    /// defined function
    fn is_builtin(&self, name: InternedString) -> bool;

    /// Names that must never be issued as fresh identifiers
    fn reserved_names(&self) -> HashSet<InternedString> {
        HashSet::default()
    }
}

/// Dialect defined by a fixed set of builtin function names
#[derive(Debug, Clone, Default)]
pub struct BuiltinSet {
    builtins: HashSet<InternedString>,
}

impl BuiltinSet {
    pub fn new<S: AsRef<str>, I: IntoIterator<Item = S>>(builtins: I) -> Self {
        Self {
            builtins: builtins.into_iter().map(InternedString::new).collect(),
        }
    }
}

impl Dialect for BuiltinSet {
    fn is_builtin(&self, name: InternedString) -> bool {
        self.builtins.contains(&name)
    }

    fn reserved_names(&self) -> HashSet<InternedString> {
        self.builtins.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{BuiltinSet, Dialect};

    #[test]
    fn builtin_lookup() {
        let dialect = BuiltinSet::new(["add", "mstore"]);
        assert!(dialect.is_builtin("add".into()));
        assert!(!dialect.is_builtin("f".into()));
        assert_eq!(dialect.reserved_names().len(), 2);
    }
}
