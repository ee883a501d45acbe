//! Driver splitting every function with unused parameters or return
//! variables in a program

use {
    crate::{
        config::PrunerConfig,
        error::PruneError,
        heuristic::was_pruned,
        mask::has_unused,
        renamer::FunctionRenamer,
        replacement::{create_replacement_with, masks_for},
        RenameTable, UsageMaskTable,
    },
    common::{
        dialect::Dialect,
        intern::InternedString,
        ir::{visitor::VisitorMut, FunctionDefinition, Program, Statement},
        names::FreshNames,
        HashMap,
    },
    core::mem,
    log::{debug, trace},
};

/// Outcome of running the [`UnusedParameterPruner`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// `(stub, reduced function)` name pairs in program order
    pub split: Vec<(InternedString, InternedString)>,
    /// Functions with unused parameters or return variables left for the
    /// inliner
    pub skipped: Vec<InternedString>,
}

/// Splits functions with unused parameters or return variables into a
/// reduced function, which keeps the original name, and a full-arity stub
/// under a fresh name which every existing call site is redirected to.
///
/// Usage tables are keyed by the names functions have before the pass runs.
#[derive(Debug, Clone, Default)]
pub struct UnusedParameterPruner {
    config: PrunerConfig,
}

impl UnusedParameterPruner {
    pub fn new(config: PrunerConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &'static str {
        "UnusedParameterPruner"
    }

    /// Runs the pass over the top-level functions of `program`.
    ///
    /// Usage masks of all candidates are checked before the program is
    /// modified, a mask whose length does not match its function's signature
    /// is reported with the program left unchanged.
    pub fn run<D: Dialect, N: FreshNames>(
        &self,
        program: &mut Program,
        dialect: &D,
        used_parameters: &UsageMaskTable,
        used_return_variables: &UsageMaskTable,
        names: &mut N,
    ) -> Result<PruneReport, PruneError> {
        let mut report = PruneReport::default();

        let candidates = program
            .code
            .functions()
            .filter(|f| self.has_unused(f, used_parameters, used_return_variables))
            .filter(|f| {
                let skip = self.config.skip_trivial_bodies && was_pruned(f, dialect);
                if skip {
                    trace!("{} is simple enough for the inliner, skipping", f.name);
                    report.skipped.push(f.name);
                }
                !skip
            })
            .map(|f| f.name)
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return Ok(report);
        }

        // masks are checked before anything is renamed so that a stale mask
        // leaves the program as it was
        for function in program
            .code
            .functions()
            .filter(|f| candidates.contains(&f.name))
        {
            masks_for(
                function,
                function.name,
                used_parameters,
                used_return_variables,
                &self.config,
            )?;
        }

        // call sites are redirected to the stubs, which take over the fresh
        // names, so that the reduced functions can keep the original ones
        let translations = candidates
            .iter()
            .map(|name| (*name, names.new_name(*name)))
            .collect::<HashMap<_, _>>();
        FunctionRenamer::new(&translations).visit_program(program);

        let inverse_translations = translations
            .iter()
            .map(|(original, renamed)| (*renamed, *original))
            .collect::<RenameTable>();

        let statements = mem::take(&mut program.code.statements);
        program.code.statements.reserve(statements.len() + candidates.len());

        let mut statements = statements.into_iter();
        while let Some(statement) = statements.next() {
            let mut function = match statement {
                Statement::FunctionDefinition(function)
                    if inverse_translations.contains_key(&function.name) =>
                {
                    function
                }
                other => {
                    program.code.statements.push(other);
                    continue;
                }
            };

            let reduced = match create_replacement_with(
                &mut function,
                used_parameters,
                used_return_variables,
                names,
                &inverse_translations,
                &self.config,
            ) {
                Ok(reduced) => reduced,
                Err(e) => {
                    // the failed function is untouched, put it and the rest back
                    program.code.statements.push(function.into());
                    program.code.statements.extend(statements);
                    return Err(e);
                }
            };

            report.split.push((function.name, reduced.name));
            program.code.statements.push(function.into());
            program.code.statements.push(reduced.into());
        }

        debug!(
            "{}: split {} functions, skipped {}",
            self.name(),
            report.split.len(),
            report.skipped.len()
        );

        Ok(report)
    }

    fn has_unused(
        &self,
        function: &FunctionDefinition,
        used_parameters: &UsageMaskTable,
        used_return_variables: &UsageMaskTable,
    ) -> bool {
        let parameters = used_parameters
            .get(&function.name)
            .is_some_and(|mask| has_unused(mask));
        let return_variables = self.config.prune_return_variables
            && used_return_variables
                .get(&function.name)
                .is_some_and(|mask| has_unused(mask));

        parameters || return_variables
    }
}
