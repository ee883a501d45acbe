//! Identifier collection and fresh name generation

use {
    crate::{
        dialect::Dialect,
        intern::InternedString,
        ir::{
            visitor::{Visitor, Walkable},
            FunctionCall, FunctionDefinition, Identifier, Program, TypedName,
        },
        HashSet,
    },
    log::trace,
};

/// Source of identifiers guaranteed not to collide with any name in the
/// program, or any name previously issued
pub trait FreshNames {
    /// Returns a fresh name derived from `hint`, the hint itself if it is
    /// still free
    fn new_name(&mut self, hint: InternedString) -> InternedString;
}

/// Collects every name occurring in a program
#[derive(Debug, Default)]
pub struct NameCollector {
    names: HashSet<InternedString>,
}

impl NameCollector {
    pub fn collect(program: &Program) -> HashSet<InternedString> {
        let mut collector = Self::default();
        collector.visit_program(program);
        collector.names
    }
}

impl Visitor for NameCollector {
    fn visit_function_definition(&mut self, node: &FunctionDefinition) {
        self.names.insert(node.name);
        node.walk(self);
    }

    fn visit_function_call(&mut self, node: &FunctionCall) {
        self.names.insert(node.function_name.name);
        node.walk(self);
    }

    fn visit_typed_name(&mut self, node: &TypedName) {
        self.names.insert(node.name);
    }

    fn visit_identifier(&mut self, node: &Identifier) {
        self.names.insert(node.name);
    }
}

/// Issues fresh names by suffixing hints with an increasing counter
#[derive(Debug, Default)]
pub struct NameDispenser {
    used: HashSet<InternedString>,
    reserved: HashSet<InternedString>,
    counter: usize,
}

impl NameDispenser {
    /// Creates a dispenser which will never issue a name present in `program`
    /// or reserved by `dialect`
    pub fn new<D: Dialect>(program: &Program, dialect: &D) -> Self {
        Self::with_used_names(NameCollector::collect(program), dialect)
    }

    pub fn with_used_names<D: Dialect>(used: HashSet<InternedString>, dialect: &D) -> Self {
        Self {
            used,
            reserved: dialect.reserved_names(),
            counter: 0,
        }
    }

    /// Records a name introduced outside the dispenser
    pub fn mark_used(&mut self, name: InternedString) {
        self.used.insert(name);
    }

    pub fn is_used(&self, name: InternedString) -> bool {
        self.used.contains(&name)
    }

    fn is_illegal(&self, name: InternedString) -> bool {
        name.is_empty() || self.used.contains(&name) || self.reserved.contains(&name)
    }
}

impl FreshNames for NameDispenser {
    fn new_name(&mut self, hint: InternedString) -> InternedString {
        let mut name = hint;
        while self.is_illegal(name) {
            self.counter += 1;
            name = InternedString::new(format!("{hint}_{}", self.counter));
        }

        trace!("issued fresh name {name} for {hint}");
        self.used.insert(name);
        name
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{FreshNames, NameCollector, NameDispenser},
        crate::{
            dialect::BuiltinSet,
            intern::InternedString,
            ir::{Expression, FunctionDefinition, Program, Statement, TypedName},
        },
    };

    fn program() -> Program {
        Program::new(vec![FunctionDefinition::new(
            "f",
            vec![TypedName::new("a"), TypedName::new("a_1")],
            vec![TypedName::new("x")],
            vec![Statement::assign(
                ["x"],
                Expression::call("g", vec![Expression::identifier("v")]),
            )],
        )
        .into()])
    }

    #[test]
    fn collects_all_names() {
        let names = NameCollector::collect(&program());
        for n in ["f", "a", "a_1", "x", "g", "v"] {
            assert!(names.contains(&InternedString::new(n)), "missing {n}");
        }
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn unused_hint_is_issued_unchanged() {
        let mut dispenser = NameDispenser::new(&program(), &BuiltinSet::default());
        assert_eq!(dispenser.new_name("b".into()), "b");
        assert!(dispenser.is_used("b".into()));
    }

    #[test]
    fn used_hint_is_suffixed() {
        let mut dispenser = NameDispenser::new(&program(), &BuiltinSet::default());
        // a and a_1 are taken
        assert_eq!(dispenser.new_name("a".into()), "a_2");
        assert_eq!(dispenser.new_name("a".into()), "a_3");
        assert_eq!(dispenser.new_name("x".into()), "x_4");
    }

    #[test]
    fn suffixed_hint_is_kept_as_given() {
        let mut dispenser = NameDispenser::new(&program(), &BuiltinSet::default());
        assert_eq!(dispenser.new_name("a_1".into()), "a_1_1");
        assert_eq!(dispenser.new_name("y_7".into()), "y_7");
    }

    #[test]
    fn reserved_names_are_never_issued() {
        let mut dispenser = NameDispenser::new(&program(), &BuiltinSet::new(["add"]));
        assert_eq!(dispenser.new_name("add".into()), "add_1");
    }

    #[test]
    fn marked_names_are_avoided() {
        let mut dispenser = NameDispenser::new(&program(), &BuiltinSet::default());
        dispenser.mark_used("b".into());
        assert_eq!(dispenser.new_name("b".into()), "b_1");
    }
}
