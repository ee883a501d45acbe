use {
    crate::ir::{
        Block, Case, Expression, FunctionCall, FunctionDefinition, Literal, LiteralKind, Program,
        Statement, TypedName,
    },
    core::fmt::{self, Display, Formatter},
    itertools::Itertools,
};

const INDENT: &str = "    ";

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_block(f, &self.code, 0)?;
        writeln!(f)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_block(f, self, 0)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_function(f, self, 0)
    }
}

impl Display for TypedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.typ.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.typ)
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::String => write!(f, "{:?}", self.value.as_ref())?,
            LiteralKind::Number | LiteralKind::Boolean => write!(f, "{}", self.value)?,
        }

        if !self.typ.is_empty() {
            write!(f, ":{}", self.typ)?;
        }

        Ok(())
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.function_name.name,
            self.arguments.iter().join(", ")
        )
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::FunctionCall(call) => write!(f, "{call}"),
            Self::Identifier(identifier) => write!(f, "{}", identifier.name),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

fn write_block(f: &mut Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    if block.statements.is_empty() {
        return write!(f, "{{ }}");
    }

    writeln!(f, "{{")?;
    for statement in &block.statements {
        write!(f, "{}", INDENT.repeat(depth + 1))?;
        write_statement(f, statement, depth + 1)?;
        writeln!(f)?;
    }
    write!(f, "{}}}", INDENT.repeat(depth))
}

fn write_function(f: &mut Formatter<'_>, function: &FunctionDefinition, depth: usize) -> fmt::Result {
    write!(
        f,
        "function {}({})",
        function.name,
        function.parameters.iter().join(", ")
    )?;

    if !function.return_variables.is_empty() {
        write!(f, " -> {}", function.return_variables.iter().join(", "))?;
    }

    write!(f, " ")?;
    write_block(f, &function.body, depth)
}

fn write_case(f: &mut Formatter<'_>, case: &Case, depth: usize) -> fmt::Result {
    match &case.value {
        Some(value) => write!(f, " case {value} ")?,
        None => write!(f, " default ")?,
    }
    write_block(f, &case.body, depth)
}

fn write_statement(f: &mut Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::ExpressionStatement { expression, .. } => write!(f, "{expression}"),
        Statement::Assignment {
            variable_names,
            value,
            ..
        } => write!(
            f,
            "{} := {value}",
            variable_names.iter().map(|i| i.name).join(", ")
        ),
        Statement::VariableDeclaration {
            variables, value, ..
        } => {
            write!(f, "let {}", variables.iter().join(", "))?;
            if let Some(value) = value {
                write!(f, " := {value}")?;
            }
            Ok(())
        }
        Statement::FunctionDefinition(function) => write_function(f, function, depth),
        Statement::If {
            condition, body, ..
        } => {
            write!(f, "if {condition} ")?;
            write_block(f, body, depth)
        }
        Statement::Switch {
            expression, cases, ..
        } => {
            write!(f, "switch {expression}")?;
            cases.iter().try_for_each(|case| write_case(f, case, depth))
        }
        Statement::ForLoop {
            pre,
            condition,
            post,
            body,
            ..
        } => {
            write!(f, "for ")?;
            write_block(f, pre, depth)?;
            write!(f, " {condition} ")?;
            write_block(f, post, depth)?;
            write!(f, " ")?;
            write_block(f, body, depth)
        }
        Statement::Break { .. } => write!(f, "break"),
        Statement::Continue { .. } => write!(f, "continue"),
        Statement::Leave { .. } => write!(f, "leave"),
        Statement::Block(block) => write_block(f, block, depth),
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::ir::{Expression, FunctionDefinition, Literal, Statement, TypedName},
        pretty_assertions::assert_eq,
    };

    #[test]
    fn function_with_returns() {
        let f = FunctionDefinition::new(
            "f",
            vec![TypedName::new("a"), TypedName::with_type("b", "u256")],
            vec![TypedName::new("x"), TypedName::new("y")],
            vec![
                Statement::declare(["t"], Some(Literal::number("1").into())),
                Statement::assign(
                    ["x", "y"],
                    Expression::call("g", vec![Expression::identifier("a"), Expression::identifier("t")]),
                ),
            ],
        );

        assert_eq!(
            f.to_string(),
            "function f(a, b:u256) -> x, y {\n    let t := 1\n    x, y := g(a, t)\n}"
        );
    }

    #[test]
    fn empty_function() {
        let f = FunctionDefinition::new("g", vec![], vec![], vec![]);
        assert_eq!(f.to_string(), "function g() { }");
    }

    #[test]
    fn nested_blocks_indent() {
        let s = Statement::If {
            location: Default::default(),
            condition: Box::new(Expression::identifier("c")),
            body: crate::ir::Block::new(vec![Statement::expression(Expression::call(
                "stop",
                vec![],
            ))]),
        };
        assert_eq!(s.to_string(), "if c {\n    stop()\n}");
    }
}
