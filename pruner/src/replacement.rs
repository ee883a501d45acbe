//! Splits a function into a reduced-arity function holding the original body
//! and a forwarding stub that keeps the original signature.
//!
//! Given `f_1(a, b) -> x, y` where `b` and `x` are unused, and a rename table
//! mapping `f_1` to `f`, this produces
//!
//! ```text
//! function f(a) -> y { <original body> }
//! function f_1(a', b') -> x', y' { y' := f(a') }
//! ```
//!
//! Call sites keep calling the stub until the inliner removes it.

use {
    crate::{
        config::PrunerConfig,
        error::{MaskKind, PruneError},
        mask::{apply_mask, count_used},
        RenameTable, UsageMaskTable,
    },
    common::{
        intern::InternedString,
        ir::{
            Block, Expression, FunctionCall, FunctionDefinition, Identifier, SourceLocation,
            Statement, TypedName,
        },
        names::FreshNames,
    },
    core::mem,
    log::debug,
};

/// Creates the reduced function for `old` and turns `old` into a stub
/// forwarding to it, using the default configuration.
///
/// See [`create_replacement_with`].
pub fn create_replacement<N: FreshNames>(
    old: &mut FunctionDefinition,
    used_parameters: &UsageMaskTable,
    used_return_variables: &UsageMaskTable,
    names: &mut N,
    translations: &RenameTable,
) -> Result<FunctionDefinition, PruneError> {
    create_replacement_with(
        old,
        used_parameters,
        used_return_variables,
        names,
        translations,
        &PrunerConfig::default(),
    )
}

/// Creates the reduced function for `old` and turns `old` into a stub
/// forwarding to it.
///
/// The reduced function is named `translations[old.name]`, which is also the
/// key for both usage tables. It takes ownership of the body of `old` and
/// keeps only the parameters and return variables marked as used. `old`
/// keeps its name and arity, with every parameter and return variable
/// renamed to a fresh name, and its body replaced by a single call to the
/// reduced function.
pub fn create_replacement_with<N: FreshNames>(
    old: &mut FunctionDefinition,
    used_parameters: &UsageMaskTable,
    used_return_variables: &UsageMaskTable,
    names: &mut N,
    translations: &RenameTable,
    config: &PrunerConfig,
) -> Result<FunctionDefinition, PruneError> {
    let reduced_name = *translations
        .get(&old.name)
        .ok_or(PruneError::MissingTranslation { name: old.name })?;

    let (parameter_mask, return_mask) = masks_for(
        old,
        reduced_name,
        used_parameters,
        used_return_variables,
        config,
    )?;

    let location = old.location.clone();

    let renamed_parameters = rename_all(&old.parameters, names);
    let renamed_return_variables = rename_all(&old.return_variables, names);

    let (parameters, forwarded_parameters) = reduce(
        mem::take(&mut old.parameters),
        &renamed_parameters,
        parameter_mask,
    );
    let (return_variables, forwarded_return_variables) = reduce(
        mem::take(&mut old.return_variables),
        &renamed_return_variables,
        return_mask,
    );

    let function = FunctionDefinition {
        location: location.clone(),
        name: reduced_name,
        parameters,
        return_variables,
        body: mem::take(&mut old.body),
    };

    debug!(
        "split {} into stub and {}: {} -> {} parameters, {} -> {} return variables",
        old.name,
        function.name,
        renamed_parameters.len(),
        parameter_mask.map_or(renamed_parameters.len(), count_used),
        renamed_return_variables.len(),
        return_mask.map_or(renamed_return_variables.len(), count_used),
    );

    let call = FunctionCall {
        location: location.clone(),
        function_name: Identifier {
            location: location.clone(),
            name: function.name,
        },
        arguments: forwarded_parameters
            .iter()
            .map(|p| Expression::Identifier(identifier(&location, p)))
            .collect(),
    };

    // `return_variables = f(reduced_parameters)`, or just the call if there
    // is nothing to assign
    let forward = if function.return_variables.is_empty() {
        Statement::ExpressionStatement {
            location: location.clone(),
            expression: Expression::FunctionCall(call),
        }
    } else {
        Statement::Assignment {
            location: location.clone(),
            variable_names: forwarded_return_variables
                .iter()
                .map(|r| identifier(&location, r))
                .collect(),
            value: Box::new(Expression::FunctionCall(call)),
        }
    };

    old.parameters = renamed_parameters;
    old.return_variables = renamed_return_variables;
    old.body = Block {
        location,
        statements: vec![forward],
    };

    Ok(function)
}

/// Gets the parameter and return variable masks of `function`, keyed by
/// `reduced_name`, checking both against the signature.
///
/// Return variable masks are ignored unless enabled in `config`.
pub(crate) fn masks_for<'t>(
    function: &FunctionDefinition,
    reduced_name: InternedString,
    used_parameters: &'t UsageMaskTable,
    used_return_variables: &'t UsageMaskTable,
    config: &PrunerConfig,
) -> Result<(Option<&'t [bool]>, Option<&'t [bool]>), PruneError> {
    let parameters = lookup_mask(
        used_parameters,
        reduced_name,
        MaskKind::Parameters,
        function.parameters.len(),
    )?;
    let return_variables = if config.prune_return_variables {
        lookup_mask(
            used_return_variables,
            reduced_name,
            MaskKind::ReturnVariables,
            function.return_variables.len(),
        )?
    } else {
        None
    };

    Ok((parameters, return_variables))
}

/// Gets the usage mask for `function`, checking it against the length of the
/// list it will filter.
///
/// A function without an entry has every element used.
fn lookup_mask(
    table: &UsageMaskTable,
    function: InternedString,
    kind: MaskKind,
    expected: usize,
) -> Result<Option<&[bool]>, PruneError> {
    match table.get(&function) {
        None => Ok(None),
        Some(mask) if mask.len() == expected => Ok(Some(mask.as_slice())),
        Some(mask) => Err(PruneError::MaskLength {
            function,
            kind,
            expected,
            found: mask.len(),
        }),
    }
}

fn rename_all<N: FreshNames>(list: &[TypedName], names: &mut N) -> Vec<TypedName> {
    list.iter()
        .map(|t| TypedName {
            name: names.new_name(t.name),
            ..t.clone()
        })
        .collect()
}

/// Returns the reduced signature list and the matching subset of the renamed
/// list
fn reduce(
    original: Vec<TypedName>,
    renamed: &[TypedName],
    mask: Option<&[bool]>,
) -> (Vec<TypedName>, Vec<TypedName>) {
    match mask {
        Some(mask) => (apply_mask(&original, mask), apply_mask(renamed, mask)),
        None => (original, renamed.to_vec()),
    }
}

fn identifier(location: &SourceLocation, name: &TypedName) -> Identifier {
    Identifier {
        location: location.clone(),
        name: name.name,
    }
}
