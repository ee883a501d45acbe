//! Finds functions simple enough that the inliner alone removes their unused
//! parameters.

use common::{
    dialect::Dialect,
    ir::{Expression, FunctionCall, FunctionDefinition, Statement},
};

/// Whether `function` should be left alone by the stub generation.
///
/// A function is skipped if its body
/// 1. is empty, or
/// 2. is a single assignment whose value is a call to a non-builtin function,
///    or
/// 3. is a single expression-statement that is a call to a non-builtin
///    function.
pub fn was_pruned<D: Dialect>(function: &FunctionDefinition, dialect: &D) -> bool {
    match function.body.statements.as_slice() {
        [] => true,
        [Statement::Assignment { value, .. }] => is_user_call(value, dialect),
        [Statement::ExpressionStatement { expression, .. }] => is_user_call(expression, dialect),
        _ => false,
    }
}

fn is_user_call<D: Dialect>(expression: &Expression, dialect: &D) -> bool {
    match expression {
        Expression::FunctionCall(FunctionCall { function_name, .. }) => {
            !dialect.is_builtin(function_name.name)
        }
        Expression::Identifier(_) | Expression::Literal(_) => false,
    }
}
