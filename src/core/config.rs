//! Description configuration.
//!
//! Callers tune the rendering pipeline through `DescribeConfig`:
//! - `condense_threshold`: how many school-variant sections trigger condensation
//! - `max_depth`: recursion guard against malformed (cyclic) effect trees
//! - `fold_duplicates` / `condense_sections`: toggle the post-processing passes

use serde::{Deserialize, Serialize};

/// Number of same-shaped sections that get collapsed into one.
///
/// Matches spells that repeat a conditional block once per elemental
/// school; keep it at 6.
pub const DEFAULT_CONDENSE_THRESHOLD: usize = 6;

/// Deepest nesting the walker follows before truncating.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration for description generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeConfig {
    /// Sections sharing a normalized shape at least this many times are condensed.
    pub condense_threshold: usize,

    /// Maximum tree depth. Deeper nodes are dropped with a warning.
    pub max_depth: usize,

    /// Fold runs of identical lines into `line xN`.
    pub fold_duplicates: bool,

    /// Collapse per-school repeated sections into one chromatic section.
    pub condense_sections: bool,
}

impl DescribeConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the condensation threshold.
    #[must_use]
    pub fn with_condense_threshold(mut self, threshold: usize) -> Self {
        self.condense_threshold = threshold;
        self
    }

    /// Set the maximum tree depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Disable duplicate line folding.
    #[must_use]
    pub fn without_folding(mut self) -> Self {
        self.fold_duplicates = false;
        self
    }

    /// Disable section condensation.
    #[must_use]
    pub fn without_condensing(mut self) -> Self {
        self.condense_sections = false;
        self
    }
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            condense_threshold: DEFAULT_CONDENSE_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
            fold_duplicates: true,
            condense_sections: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DescribeConfig::default();
        assert_eq!(config.condense_threshold, 6);
        assert_eq!(config.max_depth, 32);
        assert!(config.fold_duplicates);
        assert!(config.condense_sections);
    }

    #[test]
    fn test_builder() {
        let config = DescribeConfig::new()
            .with_condense_threshold(3)
            .with_max_depth(4)
            .without_folding();

        assert_eq!(config.condense_threshold, 3);
        assert_eq!(config.max_depth, 4);
        assert!(!config.fold_duplicates);
        assert!(config.condense_sections);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: DescribeConfig = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.condense_threshold, DEFAULT_CONDENSE_THRESHOLD);
        assert!(config.fold_duplicates);
    }
}
