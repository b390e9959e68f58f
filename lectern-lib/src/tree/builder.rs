//! Configured tree building.

use serde::{Deserialize, Serialize};

use super::flatten::{TreeNode, flatten};
use super::forest::{build_forest, build_forest_strict};
use super::record::TreeRecord;
use crate::error::TreeError;

/// Configuration for category tree building.
///
/// # Example
///
/// ```
/// use lectern_lib::tree::TreeConfig;
///
/// let config = TreeConfig::default().with_strict(true).with_start_depth(1);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Reject duplicate ids and parent cycles instead of degrading.
    ///
    /// Default: false
    pub strict: bool,

    /// Depth assigned to root rows.
    ///
    /// Default: 0
    pub start_depth: usize,
}

impl TreeConfig {
    /// Creates a new tree config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the root depth.
    pub fn with_start_depth(mut self, depth: usize) -> Self {
        self.start_depth = depth;
        self
    }
}

/// Turns flat parent-pointer rows into depth-annotated pre-order rows.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Build and flatten in one step.
    ///
    /// Only fails in strict mode.
    pub fn build<T: TreeRecord>(&self, records: &[T]) -> Result<Vec<TreeNode<T>>, TreeError> {
        let forest = if self.config.strict {
            build_forest_strict(records)?
        } else {
            build_forest(records)
        };
        Ok(flatten(&forest, self.config.start_depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_lenient_builder_never_fails() {
        let records = vec![Category::new(1, Some(2)), Category::new(2, Some(1))];
        let flat = TreeBuilder::default().build(&records).unwrap();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].depth, 0);
    }

    #[test]
    fn test_strict_builder_surfaces_errors() {
        let records = vec![Category::new(1, Some(1))];
        let builder = TreeBuilder::new(TreeConfig::new().with_strict(true));
        assert!(matches!(
            builder.build(&records),
            Err(TreeError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: TreeConfig = serde_json::from_str(r#"{"start_depth": 2}"#).unwrap();
        assert_eq!(config, TreeConfig::new().with_start_depth(2));
    }
}
