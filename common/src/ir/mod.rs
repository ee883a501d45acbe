//! Block-structured intermediate representation
//!
//! Functions are statements like any other, and all control flow is
//! structured. The set of statement and expression kinds is closed; passes
//! match on them exhaustively.

use {
    crate::intern::InternedString,
    serde::{Deserialize, Serialize},
};

pub mod pretty_print;
pub mod visitor;

/// Span in the original source, carried through for diagnostics only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub source: Option<InternedString>,
    pub start: usize,
    pub end: usize,
}

/// Name and type of a parameter, return variable or declared variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedName {
    #[serde(default)]
    pub location: SourceLocation,
    pub name: InternedString,
    /// Empty in untyped dialects
    #[serde(default)]
    pub typ: InternedString,
}

impl TypedName {
    pub fn new<N: Into<InternedString>>(name: N) -> Self {
        Self {
            location: SourceLocation::default(),
            name: name.into(),
            typ: InternedString::default(),
        }
    }

    pub fn with_type<N: Into<InternedString>, T: Into<InternedString>>(name: N, typ: T) -> Self {
        Self {
            typ: typ.into(),
            ..Self::new(name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(default)]
    pub location: SourceLocation,
    pub name: InternedString,
}

impl Identifier {
    pub fn new<N: Into<InternedString>>(name: N) -> Self {
        Self {
            location: SourceLocation::default(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralKind {
    Number,
    Boolean,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub location: SourceLocation,
    pub kind: LiteralKind,
    pub value: InternedString,
    #[serde(default)]
    pub typ: InternedString,
}

impl Literal {
    pub fn number<V: Into<InternedString>>(value: V) -> Self {
        Self {
            location: SourceLocation::default(),
            kind: LiteralKind::Number,
            value: value.into(),
            typ: InternedString::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub location: SourceLocation,
    pub function_name: Identifier,
    pub arguments: Vec<Expression>,
}

impl FunctionCall {
    pub fn new<N: Into<InternedString>>(name: N, arguments: Vec<Expression>) -> Self {
        Self {
            location: SourceLocation::default(),
            function_name: Identifier::new(name),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    FunctionCall(FunctionCall),
    Identifier(Identifier),
    Literal(Literal),
}

impl Expression {
    /// Shorthand for an identifier expression
    pub fn identifier<N: Into<InternedString>>(name: N) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Shorthand for a call expression
    pub fn call<N: Into<InternedString>>(name: N, arguments: Vec<Expression>) -> Self {
        Self::FunctionCall(FunctionCall::new(name, arguments))
    }
}

impl From<FunctionCall> for Expression {
    fn from(call: FunctionCall) -> Self {
        Self::FunctionCall(call)
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// Sequence of statements with its own scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub location: SourceLocation,
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            location: SourceLocation::default(),
            statements,
        }
    }

    /// Iterates over the function definitions directly contained in this
    /// block
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.statements.iter().filter_map(|s| match s {
            Statement::FunctionDefinition(f) => Some(f),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub location: SourceLocation,
    /// `None` for the default case
    pub value: Option<Literal>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    ExpressionStatement {
        #[serde(default)]
        location: SourceLocation,
        expression: Expression,
    },
    /// Assignment to already declared variables
    Assignment {
        #[serde(default)]
        location: SourceLocation,
        variable_names: Vec<Identifier>,
        value: Box<Expression>,
    },
    VariableDeclaration {
        #[serde(default)]
        location: SourceLocation,
        variables: Vec<TypedName>,
        value: Option<Box<Expression>>,
    },
    FunctionDefinition(FunctionDefinition),
    If {
        #[serde(default)]
        location: SourceLocation,
        condition: Box<Expression>,
        body: Block,
    },
    Switch {
        #[serde(default)]
        location: SourceLocation,
        expression: Box<Expression>,
        cases: Vec<Case>,
    },
    ForLoop {
        #[serde(default)]
        location: SourceLocation,
        pre: Block,
        condition: Box<Expression>,
        post: Block,
        body: Block,
    },
    Break {
        #[serde(default)]
        location: SourceLocation,
    },
    Continue {
        #[serde(default)]
        location: SourceLocation,
    },
    Leave {
        #[serde(default)]
        location: SourceLocation,
    },
    Block(Block),
}

impl Statement {
    /// Shorthand for an expression statement
    pub fn expression<E: Into<Expression>>(expression: E) -> Self {
        Self::ExpressionStatement {
            location: SourceLocation::default(),
            expression: expression.into(),
        }
    }

    /// Shorthand for an assignment of `value` to `variables`
    pub fn assign<N: Into<InternedString>, I: IntoIterator<Item = N>, E: Into<Expression>>(
        variables: I,
        value: E,
    ) -> Self {
        Self::Assignment {
            location: SourceLocation::default(),
            variable_names: variables.into_iter().map(Identifier::new).collect(),
            value: Box::new(value.into()),
        }
    }

    /// Shorthand for a declaration of `variables`, optionally initialised
    pub fn declare<N: Into<InternedString>, I: IntoIterator<Item = N>>(
        variables: I,
        value: Option<Expression>,
    ) -> Self {
        Self::VariableDeclaration {
            location: SourceLocation::default(),
            variables: variables.into_iter().map(TypedName::new).collect(),
            value: value.map(Box::new),
        }
    }
}

impl From<FunctionDefinition> for Statement {
    fn from(function: FunctionDefinition) -> Self {
        Self::FunctionDefinition(function)
    }
}

/// Function signature and body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(default)]
    pub location: SourceLocation,
    pub name: InternedString,
    pub parameters: Vec<TypedName>,
    pub return_variables: Vec<TypedName>,
    pub body: Block,
}

impl FunctionDefinition {
    pub fn new<N: Into<InternedString>>(
        name: N,
        parameters: Vec<TypedName>,
        return_variables: Vec<TypedName>,
        body: Vec<Statement>,
    ) -> Self {
        Self {
            location: SourceLocation::default(),
            name: name.into(),
            parameters,
            return_variables,
            body: Block::new(body),
        }
    }
}

/// A whole program; function definitions are hoisted into the top level of
/// `code` by earlier passes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub code: Block,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            code: Block::new(statements),
        }
    }

    /// Gets a top-level function definition by name
    pub fn function(&self, name: InternedString) -> Option<&FunctionDefinition> {
        self.code.functions().find(|f| f.name == name)
    }
}
