//! Visitor pattern for the IR
//!
//! Visitor traits have overridable methods, the default implementation of
//! each walks the children of the node.

use crate::ir::{
    Block, Case, Expression, FunctionCall, FunctionDefinition, Identifier, Literal, Program,
    Statement, TypedName,
};

/// Trait encapsulating the traversing logic for the IR
pub trait Walkable {
    /// Visit children of the current node
    fn walk<V: Visitor>(&self, visitor: &mut V);
}

/// Trait encapsulating the mutable traversing logic for the IR
pub trait WalkableMut {
    /// Visit children of the current node, allowing them to be modified
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V);
}

/// Visitor trait for inspecting the IR
#[allow(missing_docs)]
pub trait Visitor: Sized {
    fn visit_program(&mut self, node: &Program) {
        self.visit_block(&node.code);
    }

    fn visit_block(&mut self, node: &Block) {
        node.walk(self);
    }

    fn visit_statement(&mut self, node: &Statement) {
        node.walk(self);
    }

    fn visit_function_definition(&mut self, node: &FunctionDefinition) {
        node.walk(self);
    }

    fn visit_case(&mut self, node: &Case) {
        node.walk(self);
    }

    fn visit_expression(&mut self, node: &Expression) {
        node.walk(self);
    }

    fn visit_function_call(&mut self, node: &FunctionCall) {
        node.walk(self);
    }

    fn visit_typed_name(&mut self, _node: &TypedName) {}

    fn visit_identifier(&mut self, _node: &Identifier) {}

    fn visit_literal(&mut self, _node: &Literal) {}
}

/// Visitor trait for rewriting the IR in place
#[allow(missing_docs)]
pub trait VisitorMut: Sized {
    fn visit_program(&mut self, node: &mut Program) {
        self.visit_block(&mut node.code);
    }

    fn visit_block(&mut self, node: &mut Block) {
        node.walk_mut(self);
    }

    fn visit_statement(&mut self, node: &mut Statement) {
        node.walk_mut(self);
    }

    fn visit_function_definition(&mut self, node: &mut FunctionDefinition) {
        node.walk_mut(self);
    }

    fn visit_case(&mut self, node: &mut Case) {
        node.walk_mut(self);
    }

    fn visit_expression(&mut self, node: &mut Expression) {
        node.walk_mut(self);
    }

    fn visit_function_call(&mut self, node: &mut FunctionCall) {
        node.walk_mut(self);
    }

    fn visit_typed_name(&mut self, _node: &mut TypedName) {}

    fn visit_identifier(&mut self, _node: &mut Identifier) {}

    fn visit_literal(&mut self, _node: &mut Literal) {}
}

impl Walkable for Block {
    fn walk<V: Visitor>(&self, visitor: &mut V) {
        self.statements
            .iter()
            .for_each(|statement| visitor.visit_statement(statement));
    }
}

impl Walkable for FunctionDefinition {
    fn walk<V: Visitor>(&self, visitor: &mut V) {
        self.parameters
            .iter()
            .chain(&self.return_variables)
            .for_each(|name| visitor.visit_typed_name(name));
        visitor.visit_block(&self.body);
    }
}

impl Walkable for Case {
    fn walk<V: Visitor>(&self, visitor: &mut V) {
        if let Some(value) = &self.value {
            visitor.visit_literal(value);
        }
        visitor.visit_block(&self.body);
    }
}

impl Walkable for Statement {
    fn walk<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Self::ExpressionStatement { expression, .. } => visitor.visit_expression(expression),
            Self::Assignment {
                variable_names,
                value,
                ..
            } => {
                variable_names
                    .iter()
                    .for_each(|name| visitor.visit_identifier(name));
                visitor.visit_expression(value);
            }
            Self::VariableDeclaration {
                variables, value, ..
            } => {
                variables
                    .iter()
                    .for_each(|name| visitor.visit_typed_name(name));
                if let Some(value) = value {
                    visitor.visit_expression(value);
                }
            }
            Self::FunctionDefinition(function) => visitor.visit_function_definition(function),
            Self::If {
                condition, body, ..
            } => {
                visitor.visit_expression(condition);
                visitor.visit_block(body);
            }
            Self::Switch {
                expression, cases, ..
            } => {
                visitor.visit_expression(expression);
                cases.iter().for_each(|case| visitor.visit_case(case));
            }
            Self::ForLoop {
                pre,
                condition,
                post,
                body,
                ..
            } => {
                visitor.visit_block(pre);
                visitor.visit_expression(condition);
                visitor.visit_block(post);
                visitor.visit_block(body);
            }
            Self::Break { .. } | Self::Continue { .. } | Self::Leave { .. } => (),
            Self::Block(block) => visitor.visit_block(block),
        }
    }
}

impl Walkable for Expression {
    fn walk<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Self::FunctionCall(call) => visitor.visit_function_call(call),
            Self::Identifier(identifier) => visitor.visit_identifier(identifier),
            Self::Literal(literal) => visitor.visit_literal(literal),
        }
    }
}

impl Walkable for FunctionCall {
    fn walk<V: Visitor>(&self, visitor: &mut V) {
        // arguments are evaluated right to left
        self.arguments
            .iter()
            .rev()
            .for_each(|argument| visitor.visit_expression(argument));
    }
}

impl WalkableMut for Block {
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        self.statements
            .iter_mut()
            .for_each(|statement| visitor.visit_statement(statement));
    }
}

impl WalkableMut for FunctionDefinition {
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        self.parameters
            .iter_mut()
            .chain(&mut self.return_variables)
            .for_each(|name| visitor.visit_typed_name(name));
        visitor.visit_block(&mut self.body);
    }
}

impl WalkableMut for Case {
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        if let Some(value) = &mut self.value {
            visitor.visit_literal(value);
        }
        visitor.visit_block(&mut self.body);
    }
}

impl WalkableMut for Statement {
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        match self {
            Self::ExpressionStatement { expression, .. } => visitor.visit_expression(expression),
            Self::Assignment {
                variable_names,
                value,
                ..
            } => {
                variable_names
                    .iter_mut()
                    .for_each(|name| visitor.visit_identifier(name));
                visitor.visit_expression(value);
            }
            Self::VariableDeclaration {
                variables, value, ..
            } => {
                variables
                    .iter_mut()
                    .for_each(|name| visitor.visit_typed_name(name));
                if let Some(value) = value {
                    visitor.visit_expression(value);
                }
            }
            Self::FunctionDefinition(function) => visitor.visit_function_definition(function),
            Self::If {
                condition, body, ..
            } => {
                visitor.visit_expression(condition);
                visitor.visit_block(body);
            }
            Self::Switch {
                expression, cases, ..
            } => {
                visitor.visit_expression(expression);
                cases.iter_mut().for_each(|case| visitor.visit_case(case));
            }
            Self::ForLoop {
                pre,
                condition,
                post,
                body,
                ..
            } => {
                visitor.visit_block(pre);
                visitor.visit_expression(condition);
                visitor.visit_block(post);
                visitor.visit_block(body);
            }
            Self::Break { .. } | Self::Continue { .. } | Self::Leave { .. } => (),
            Self::Block(block) => visitor.visit_block(block),
        }
    }
}

impl WalkableMut for Expression {
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        match self {
            Self::FunctionCall(call) => visitor.visit_function_call(call),
            Self::Identifier(identifier) => visitor.visit_identifier(identifier),
            Self::Literal(literal) => visitor.visit_literal(literal),
        }
    }
}

impl WalkableMut for FunctionCall {
    fn walk_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        self.arguments
            .iter_mut()
            .rev()
            .for_each(|argument| visitor.visit_expression(argument));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Visitor, VisitorMut},
        crate::ir::{Expression, FunctionDefinition, Identifier, Program, Statement, TypedName},
    };

    fn program() -> Program {
        Program::new(vec![
            FunctionDefinition::new(
                "f",
                vec![TypedName::new("a")],
                vec![TypedName::new("r")],
                vec![Statement::assign(
                    ["r"],
                    Expression::call("add", vec![Expression::identifier("a")]),
                )],
            )
            .into(),
            Statement::expression(Expression::call(
                "f",
                vec![Expression::call("g", vec![])],
            )),
        ])
    }

    #[test]
    fn visits_calls_in_nested_positions() {
        #[derive(Default)]
        struct Calls(Vec<String>);

        impl Visitor for Calls {
            fn visit_function_call(&mut self, node: &crate::ir::FunctionCall) {
                self.0.push(node.function_name.name.to_string());
                super::Walkable::walk(node, self);
            }
        }

        let mut calls = Calls::default();
        calls.visit_program(&program());
        assert_eq!(calls.0, ["add", "f", "g"]);
    }

    #[test]
    fn mutates_identifiers() {
        struct Upper;

        impl VisitorMut for Upper {
            fn visit_identifier(&mut self, node: &mut Identifier) {
                node.name = node.name.as_ref().to_uppercase().into();
            }
        }

        let mut program = program();
        Upper.visit_program(&mut program);

        let Statement::FunctionDefinition(f) = &program.code.statements[0] else {
            panic!("expected function definition");
        };
        assert_eq!(
            f.body.statements[0],
            Statement::assign(["R"], Expression::call("add", vec![Expression::identifier("A")]))
        );
        // parameters are typed names and are not visited as identifiers
        assert_eq!(f.parameters[0].name, "a");
    }
}
