//! Removal of unused function parameters and return variables.
//!
//! Functions are split into a reduced function, holding the original body
//! with only the used parameters and return variables, and a stub with the
//! original signature which forwards to it. The inliner later removes the
//! stub at every call site.

use common::{intern::InternedString, HashMap};

pub mod config;
pub mod error;
pub mod heuristic;
pub mod mask;
pub mod pass;
pub mod renamer;
pub mod replacement;

pub use {
    config::PrunerConfig,
    error::{MaskKind, PruneError},
    heuristic::was_pruned,
    mask::apply_mask,
    pass::{PruneReport, UnusedParameterPruner},
    replacement::{create_replacement, create_replacement_with},
};

/// Per-position "is used" flags for the parameters or return variables of a
/// function
pub type UsageMask = Vec<bool>;

/// Usage masks by function name.
///
/// A function without an entry is treated as having every entry used, which
/// is not distinguished from an entry of all `true`.
pub type UsageMaskTable = HashMap<InternedString, UsageMask>;

/// Maps the current name of a function to the name of its reduced function
pub type RenameTable = HashMap<InternedString, InternedString>;

/// Initialize the logger, ignoring the error if it was already initialised
pub fn init_logger(filters: &str) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.parse_filters(filters);
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
