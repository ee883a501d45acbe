use serde::{Deserialize, Serialize};

/// Options controlling which functions are split and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrunerConfig {
    /// Leave functions alone that the inliner can already reduce, see
    /// [`crate::heuristic::was_pruned`]
    pub skip_trivial_bodies: bool,
    /// Reduce return variables as well as parameters
    pub prune_return_variables: bool,
}

impl Default for PrunerConfig {
    fn default() -> Self {
        Self {
            skip_trivial_bodies: true,
            prune_return_variables: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrunerConfig;

    #[test]
    fn missing_fields_use_defaults() {
        let config: PrunerConfig =
            serde_json::from_str(r#"{ "prune_return_variables": false }"#).unwrap();
        assert_eq!(
            config,
            PrunerConfig {
                skip_trivial_bodies: true,
                prune_return_variables: false,
            }
        );
        assert_eq!(
            serde_json::from_str::<PrunerConfig>("{}").unwrap(),
            PrunerConfig::default()
        );
    }
}
