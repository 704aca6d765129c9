//! Description generation.
//!
//! The pipeline for one spell:
//! 1. `Walker` renders the forest depth-first into newline-terminated lines
//! 2. `fold_duplicate_lines` folds repeated lines into `line xN`
//! 3. `condense_sections` collapses per-school repeated sections
//!
//! `generate_description` runs it with the default `DescribeConfig`;
//! `Describer` lets callers tune or disable the passes.

mod condition;
mod postprocess;
mod walker;

pub use condition::rewrite_condition;
pub use postprocess::{condense_sections, fold_duplicate_lines};
pub use walker::Walker;

use crate::core::DescribeConfig;
use crate::effects::EffectForest;
use crate::names::NameResolver;

/// A configured description generator.
///
/// ## Example
///
/// ```
/// use spellscribe::core::{DescribeConfig, EffectId};
/// use spellscribe::describe::Describer;
/// use spellscribe::effects::{EffectForest, EffectKind, EffectNode};
/// use spellscribe::names::NoNames;
///
/// let forest = EffectForest::from_nodes(vec![
///     EffectNode::new(EffectId::new(1), EffectId::ROOT, EffectKind::Heal).with_param(30),
///     EffectNode::new(EffectId::new(2), EffectId::ROOT, EffectKind::Heal).with_param(30),
/// ]);
///
/// let describer = Describer::new(NoNames).with_config(DescribeConfig::new().without_folding());
/// let text = futures::executor::block_on(describer.describe(&forest));
/// assert_eq!(text.lines().count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Describer<R> {
    config: DescribeConfig,
    resolver: R,
}

impl<R: NameResolver> Describer<R> {
    /// Create a describer with the default configuration.
    pub fn new(resolver: R) -> Self {
        Self { config: DescribeConfig::default(), resolver }
    }

    #[must_use]
    pub fn with_config(mut self, config: DescribeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DescribeConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Render one spell's effect forest.
    pub async fn describe(&self, forest: &EffectForest) -> String {
        let raw = Walker::new(forest, &self.resolver, self.config.max_depth).run().await;
        self.postprocess(&raw)
    }

    /// Run the enabled text passes over walker output.
    pub fn postprocess(&self, text: &str) -> String {
        let mut text = text.to_string();
        if self.config.fold_duplicates {
            text = fold_duplicate_lines(&text);
        }
        if self.config.condense_sections {
            text = condense_sections(&text, self.config.condense_threshold);
        }
        text
    }
}

/// Render one spell's effect forest with the default configuration.
///
/// Never fails: unknown kinds render nothing, failed lookups show the raw
/// id, and subtrees past the depth limit are dropped.
pub async fn generate_description(forest: &EffectForest, resolver: &dyn NameResolver) -> String {
    Describer::new(resolver).describe(forest).await
}
