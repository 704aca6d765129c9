//! Effect forest: the flat row set of one spell, indexed by parent.
//!
//! Rows stay in an arena in ingestion order. A parent index maps each
//! parent id to the arena slots of its children, so sibling order is the
//! row order and no explicit ordering column is needed.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{EffectId, Result};

use super::{EffectNode, EffectRow};

type ChildSlots = SmallVec<[usize; 4]>;

/// All effect nodes of one spell.
///
/// ## Example
///
/// ```
/// use spellscribe::core::EffectId;
/// use spellscribe::effects::{EffectForest, EffectKind, EffectNode, NodeClass};
///
/// let forest = EffectForest::from_nodes(vec![
///     EffectNode::wrapper(EffectId::new(1), EffectId::ROOT, NodeClass::Plain),
///     EffectNode::new(EffectId::new(2), EffectId::new(1), EffectKind::Damage),
/// ]);
///
/// assert_eq!(forest.roots().count(), 1);
/// assert_eq!(forest.children(EffectId::new(1)).count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectForest {
    nodes: Vec<EffectNode>,
    by_id: FxHashMap<EffectId, usize>,
    children: FxHashMap<EffectId, ChildSlots>,
}

impl EffectForest {
    /// Create an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest from typed nodes, keeping their order.
    ///
    /// The first row with a given id wins; later duplicates are dropped
    /// with a warning. Rows whose parent is neither the root sentinel nor
    /// another row are kept but unreachable; they are logged too.
    #[must_use]
    pub fn from_nodes(rows: Vec<EffectNode>) -> Self {
        let mut nodes = Vec::with_capacity(rows.len());
        let mut by_id = FxHashMap::default();
        let mut children: FxHashMap<EffectId, ChildSlots> = FxHashMap::default();

        for node in rows {
            if by_id.contains_key(&node.id) {
                warn!(id = %node.id, "duplicate effect id, dropping the later row");
                continue;
            }
            let slot = nodes.len();
            by_id.insert(node.id, slot);
            children.entry(node.parent_id).or_default().push(slot);
            nodes.push(node);
        }

        for node in &nodes {
            if !node.parent_id.is_root() && !by_id.contains_key(&node.parent_id) {
                warn!(id = %node.id, parent = %node.parent_id, "effect row has a dangling parent");
            }
        }

        Self { nodes, by_id, children }
    }

    /// Convert raw rows and build a forest from them.
    ///
    /// Fails only on a target or school outside the known set.
    pub fn from_rows(rows: impl IntoIterator<Item = EffectRow>) -> Result<Self> {
        let nodes = rows
            .into_iter()
            .map(EffectNode::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_nodes(nodes))
    }

    /// Get a node by id.
    #[must_use]
    pub fn get(&self, id: EffectId) -> Option<&EffectNode> {
        self.by_id.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// Children of `parent`, in row order.
    pub fn children(&self, parent: EffectId) -> impl Iterator<Item = &EffectNode> + '_ {
        self.children
            .get(&parent)
            .into_iter()
            .flat_map(move |slots| slots.iter().map(move |&slot| &self.nodes[slot]))
    }

    /// Root nodes (parented to the sentinel), in row order.
    pub fn roots(&self) -> impl Iterator<Item = &EffectNode> + '_ {
        self.children(EffectId::ROOT)
    }

    /// Does `id` have any children?
    #[must_use]
    pub fn has_children(&self, id: EffectId) -> bool {
        self.children.get(&id).is_some_and(|slots| !slots.is_empty())
    }

    /// Ids of nodes that cannot be reached from the root sentinel.
    ///
    /// Covers dangling parents and rows caught in a parent cycle.
    #[must_use]
    pub fn unreachable(&self) -> Vec<EffectId> {
        let mut seen = FxHashSet::default();
        let mut stack = vec![EffectId::ROOT];

        while let Some(parent) = stack.pop() {
            for child in self.children(parent) {
                if seen.insert(child.id) {
                    stack.push(child.id);
                }
            }
        }

        self.nodes
            .iter()
            .map(|node| node.id)
            .filter(|id| !seen.contains(id))
            .collect()
    }

    /// Iterate over all nodes in row order.
    pub fn iter(&self) -> impl Iterator<Item = &EffectNode> {
        self.nodes.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the forest empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
