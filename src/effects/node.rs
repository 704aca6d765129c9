//! Effect rows and typed effect nodes.
//!
//! `EffectRow` is the shape rows have in the data store: plain integers.
//! `EffectNode` is the same row with every closed enumeration resolved,
//! produced by `EffectNode::try_from(row)`.
//!
//! Only targets and schools are strict. Any other unknown discriminant
//! degrades to its neutral value and is logged at debug level.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EffectError, EffectId, Result, SpellId};

use super::{EffectKind, EffectTarget, School};

/// Structural role of a node.
///
/// The class of a *parent* decides how its children are laid out; the
/// child's own class only matters once it becomes a parent itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    /// Children render in order, no header.
    #[default]
    Plain = 0,
    /// Exactly one child happens, picked at random.
    RandomChoice = 1,
    /// Children are alternatives keyed by X-pip rank.
    VariablePip = 2,
    /// Pass-through grouping, no header.
    Sequential = 3,
    /// Children apply when the node's condition holds.
    ConditionalBranch = 4,
    /// Pass-through alias, no header.
    VariantAlias = 5,
    /// Children convert hanging effects, keyed by rank.
    ConversionBranch = 6,
}

impl NodeClass {
    /// Resolve a stored node class discriminant.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            0 => NodeClass::Plain,
            1 => NodeClass::RandomChoice,
            2 => NodeClass::VariablePip,
            3 => NodeClass::Sequential,
            4 => NodeClass::ConditionalBranch,
            5 => NodeClass::VariantAlias,
            6 => NodeClass::ConversionBranch,
            _ => return None,
        })
    }
}

/// Which side of a bidirectional effect applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Both beneficial and harmful effects.
    #[default]
    Both = 0,
    /// Beneficial effects only (blades, shields, heals over time).
    Beneficial = 1,
    /// Harmful effects only (weaknesses, traps, damage over time).
    Harmful = 2,
}

impl Disposition {
    /// Resolve a stored disposition discriminant.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            0 => Disposition::Both,
            1 => Disposition::Beneficial,
            2 => Disposition::Harmful,
            _ => return None,
        })
    }
}

/// One effect row as stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectRow {
    pub id: i64,
    pub spell_id: i64,
    pub parent_id: i64,
    pub node_class: i32,
    pub effect_kind: i32,
    pub param: i64,
    pub disposition: i32,
    pub target: i32,
    pub heal_modifier: f64,
    pub rounds: i32,
    pub pip_num: i32,
    pub protected: bool,
    pub rank: i32,
    pub school: i32,
    pub condition: String,
}

/// One typed node of an effect forest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectNode {
    pub id: EffectId,
    pub spell_id: SpellId,
    pub parent_id: EffectId,
    pub class: NodeClass,
    pub kind: EffectKind,
    /// Magnitude, percentage or referenced id, depending on `kind`.
    pub param: i64,
    pub disposition: Disposition,
    pub target: EffectTarget,
    pub heal_modifier: f64,
    /// Duration in rounds; 0 is instantaneous.
    pub rounds: i32,
    pub pip_num: i32,
    /// Selects the protected glyph variant where one exists.
    pub protected: bool,
    /// X-pip rank or conversion ordinal, depending on the parent's class.
    pub rank: i32,
    pub school: School,
    /// Free text shown as a header on conditional and conversion nodes.
    pub condition: String,
}

impl EffectNode {
    /// Create a node with neutral defaults.
    ///
    /// ```
    /// use spellscribe::core::EffectId;
    /// use spellscribe::effects::{EffectKind, EffectNode, School};
    ///
    /// let node = EffectNode::new(EffectId::new(2), EffectId::new(1), EffectKind::Damage)
    ///     .with_param(100)
    ///     .with_school(School::Fire);
    /// assert_eq!(node.param, 100);
    /// ```
    pub fn new(id: EffectId, parent_id: EffectId, kind: EffectKind) -> Self {
        Self {
            id,
            spell_id: SpellId::new(0),
            parent_id,
            class: NodeClass::Plain,
            kind,
            param: 0,
            disposition: Disposition::Both,
            target: EffectTarget::Invalid,
            heal_modifier: 0.0,
            rounds: 0,
            pip_num: 0,
            protected: false,
            rank: 0,
            school: School::Universal,
            condition: String::new(),
        }
    }

    /// Create a structural wrapper node (no leaf kind).
    pub fn wrapper(id: EffectId, parent_id: EffectId, class: NodeClass) -> Self {
        Self::new(id, parent_id, EffectKind::Invalid).with_class(class)
    }

    #[must_use]
    pub fn with_class(mut self, class: NodeClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: i64) -> Self {
        self.param = param;
        self
    }

    #[must_use]
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: EffectTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_heal_modifier(mut self, modifier: f64) -> Self {
        self.heal_modifier = modifier;
        self
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: i32) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_pip_num(mut self, pip_num: i32) -> Self {
        self.pip_num = pip_num;
        self
    }

    #[must_use]
    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }

    #[must_use]
    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    #[must_use]
    pub fn with_school(mut self, school: School) -> Self {
        self.school = school;
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    #[must_use]
    pub fn with_spell(mut self, spell_id: SpellId) -> Self {
        self.spell_id = spell_id;
        self
    }
}

impl TryFrom<EffectRow> for EffectNode {
    type Error = EffectError;

    fn try_from(row: EffectRow) -> Result<Self> {
        let id = EffectId::new(row.id);

        let class = NodeClass::from_raw(row.node_class).unwrap_or_else(|| {
            debug!(%id, class = row.node_class, "unknown node class, treating as plain");
            NodeClass::Plain
        });
        let target = EffectTarget::from_raw(row.target)
            .ok_or(EffectError::UnknownTarget { id, value: row.target })?;
        let school = School::from_raw(row.school)
            .ok_or(EffectError::UnknownSchool { id, value: row.school })?;
        let disposition = Disposition::from_raw(row.disposition).unwrap_or_else(|| {
            debug!(%id, disposition = row.disposition, "unknown disposition, treating as both");
            Disposition::Both
        });

        let kind = EffectKind::from_raw(row.effect_kind).unwrap_or_else(|| {
            debug!(%id, kind = row.effect_kind, "unknown effect kind, rendering nothing");
            EffectKind::Invalid
        });

        Ok(Self {
            id,
            spell_id: SpellId::new(row.spell_id),
            parent_id: EffectId::new(row.parent_id),
            class,
            kind,
            param: row.param,
            disposition,
            target,
            heal_modifier: row.heal_modifier,
            rounds: row.rounds,
            pip_num: row.pip_num,
            protected: row.protected,
            rank: row.rank,
            school,
            condition: row.condition,
        })
    }
}
