//! Renames functions at their definitions and call sites

use {
    common::{
        intern::InternedString,
        ir::{
            visitor::{VisitorMut, WalkableMut},
            FunctionCall, FunctionDefinition,
        },
        HashMap,
    },
    log::trace,
};

/// Applies `translations` to every function definition name and call target
/// it visits. Variables sharing a name with a renamed function are not
/// touched.
pub struct FunctionRenamer<'a> {
    translations: &'a HashMap<InternedString, InternedString>,
}

impl<'a> FunctionRenamer<'a> {
    pub fn new(translations: &'a HashMap<InternedString, InternedString>) -> Self {
        Self { translations }
    }

    fn translate(&self, name: &mut InternedString) {
        if let Some(new) = self.translations.get(&*name) {
            trace!("renaming function {name} to {new}");
            *name = *new;
        }
    }
}

impl VisitorMut for FunctionRenamer<'_> {
    fn visit_function_definition(&mut self, node: &mut FunctionDefinition) {
        self.translate(&mut node.name);
        node.walk_mut(self);
    }

    fn visit_function_call(&mut self, node: &mut FunctionCall) {
        self.translate(&mut node.function_name.name);
        node.walk_mut(self);
    }
}

#[cfg(test)]
mod tests {
    use {
        super::FunctionRenamer,
        common::{
            intern::InternedString,
            ir::{visitor::VisitorMut, Expression, FunctionDefinition, Program, Statement, TypedName},
            HashMap,
        },
        pretty_assertions::assert_eq,
    };

    #[test]
    fn renames_definitions_and_calls_only() {
        let mut program = Program::new(vec![
            FunctionDefinition::new(
                "f",
                vec![TypedName::new("a")],
                vec![],
                vec![Statement::expression(Expression::call(
                    "f",
                    vec![Expression::call("g", vec![Expression::identifier("f")])],
                ))],
            )
            .into(),
            Statement::declare(["f"], Some(Expression::call("f", vec![]))),
        ]);

        let translations: HashMap<InternedString, InternedString> =
            [("f".into(), "f_1".into())].into_iter().collect();
        FunctionRenamer::new(&translations).visit_program(&mut program);

        assert_eq!(
            program,
            Program::new(vec![
                FunctionDefinition::new(
                    "f_1",
                    vec![TypedName::new("a")],
                    vec![],
                    vec![Statement::expression(Expression::call(
                        "f_1",
                        vec![Expression::call("g", vec![Expression::identifier("f")])],
                    ))],
                )
                .into(),
                Statement::declare(["f"], Some(Expression::call("f_1", vec![]))),
            ])
        );
    }
}
