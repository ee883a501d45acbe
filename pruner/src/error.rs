use {common::intern::InternedString, core::fmt};

/// Which signature list a usage mask applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Parameters,
    ReturnVariables,
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameters => write!(f, "parameter"),
            Self::ReturnVariables => write!(f, "return variable"),
        }
    }
}

/// Inconsistencies between the pruning passes and the analysis that fed them
#[derive(thiserror::Error, displaydoc::Display, Debug, Clone, PartialEq, Eq)]
pub enum PruneError {
    /// No reduced function name recorded for {name:?}
    MissingTranslation { name: InternedString },
    /// {kind} usage mask for {function:?} has {found} entries but the function has {expected}
    MaskLength {
        function: InternedString,
        kind: MaskKind,
        expected: usize,
        found: usize,
    },
}
