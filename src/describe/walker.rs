//! Depth-first traversal of an effect forest.
//!
//! Children are visited in row order. Each child first emits its own line,
//! then its class decides how its own children are laid out:
//!
//! | class | header | child flags |
//! |---|---|---|
//! | Plain, Sequential, VariantAlias | none | default |
//! | RandomChoice | `Random:` | default |
//! | VariablePip | `Variable:` | variable pip |
//! | ConditionalBranch | rewritten condition + `:` | default |
//! | ConversionBranch | rewritten condition (blade/trap mode) + `:` | conversion |
//!
//! Headed blocks end with a blank line. Name lookups are awaited one at a
//! time so lines always come out in traversal order.

use futures::future::{BoxFuture, FutureExt};
use tracing::{trace, warn};

use crate::core::EffectId;
use crate::effects::{EffectForest, EffectNode, NodeClass};
use crate::format::{format_leaf, LineFlags};
use crate::names::NameResolver;

use super::condition::rewrite_condition;

/// Walks one forest, producing newline-terminated lines.
pub struct Walker<'a> {
    forest: &'a EffectForest,
    names: &'a dyn NameResolver,
    max_depth: usize,
}

impl<'a> Walker<'a> {
    pub fn new(forest: &'a EffectForest, names: &'a dyn NameResolver, max_depth: usize) -> Self {
        Self { forest, names, max_depth }
    }

    /// Render the whole forest, starting at the root sentinel.
    pub async fn run(&self) -> String {
        self.walk(EffectId::ROOT, LineFlags::default(), 0).await
    }

    fn walk(&self, parent: EffectId, flags: LineFlags, depth: usize) -> BoxFuture<'_, String> {
        async move {
            let mut out = String::new();
            if depth >= self.max_depth {
                if self.forest.has_children(parent) {
                    warn!(%parent, depth, "effect tree too deep, dropping subtree");
                }
                return out;
            }

            for child in self.forest.children(parent) {
                let line = format_leaf(child, flags, self.names).await;
                if !line.is_empty() {
                    out.push_str(&line);
                    out.push('\n');
                }

                if self.forest.has_children(child.id) {
                    out.push_str(&self.descend(child, depth).await);
                }
            }

            out
        }
        .boxed()
    }

    /// Lay out the children of `node` according to its class.
    async fn descend(&self, node: &EffectNode, depth: usize) -> String {
        trace!(id = %node.id, class = ?node.class, "descending");

        let (header, flags) = match node.class {
            NodeClass::Plain | NodeClass::Sequential | NodeClass::VariantAlias => {
                return self.walk(node.id, LineFlags::default(), depth + 1).await;
            }
            NodeClass::RandomChoice => ("Random:".to_string(), LineFlags::default()),
            NodeClass::VariablePip => ("Variable:".to_string(), LineFlags::VARIABLE_PIP),
            NodeClass::ConditionalBranch => {
                (format!("{}:", rewrite_condition(&node.condition, false)), LineFlags::default())
            }
            NodeClass::ConversionBranch => {
                (format!("{}:", rewrite_condition(&node.condition, true)), LineFlags::CONVERSION)
            }
        };

        let body = self.walk(node.id, flags, depth + 1).await;
        format!("{header}\n{body}\n")
    }
}
