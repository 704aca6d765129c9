//! Effect target shapes.

use serde::{Deserialize, Serialize};

use crate::glyphs;

/// Who an effect lands on.
///
/// Discriminants match the values stored on effect rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    Invalid = 0,
    Spell = 1,
    SpecificSpells = 2,
    Global = 3,
    EnemyTeam = 4,
    EnemyTeamAllAtOnce = 5,
    FriendlyTeam = 6,
    FriendlyTeamAllAtOnce = 7,
    EnemySingle = 8,
    FriendlySingle = 9,
    Minion = 10,
    FriendlyMinion = 11,
    SelfTarget = 12,
    AtLeastOneEnemy = 13,
    PreselectedEnemySingle = 14,
    MultiTargetEnemy = 15,
    MultiTargetFriendly = 16,
    FriendlySingleNotMe = 17,
}

impl EffectTarget {
    /// Resolve a stored target discriminant.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            0 => EffectTarget::Invalid,
            1 => EffectTarget::Spell,
            2 => EffectTarget::SpecificSpells,
            3 => EffectTarget::Global,
            4 => EffectTarget::EnemyTeam,
            5 => EffectTarget::EnemyTeamAllAtOnce,
            6 => EffectTarget::FriendlyTeam,
            7 => EffectTarget::FriendlyTeamAllAtOnce,
            8 => EffectTarget::EnemySingle,
            9 => EffectTarget::FriendlySingle,
            10 => EffectTarget::Minion,
            11 => EffectTarget::FriendlyMinion,
            12 => EffectTarget::SelfTarget,
            13 => EffectTarget::AtLeastOneEnemy,
            14 => EffectTarget::PreselectedEnemySingle,
            15 => EffectTarget::MultiTargetEnemy,
            16 => EffectTarget::MultiTargetFriendly,
            17 => EffectTarget::FriendlySingleNotMe,
            _ => return None,
        })
    }

    /// Suffix glyph appended after an effect line, if this shape has one.
    #[must_use]
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            EffectTarget::Global => Some(glyphs::GLOBAL),
            EffectTarget::EnemyTeam => Some(glyphs::ALL_ENEMIES),
            EffectTarget::EnemyTeamAllAtOnce => Some(glyphs::ALL_ENEMIES_SQUARE),
            EffectTarget::FriendlyTeam => Some(glyphs::ALL_FRIENDS),
            EffectTarget::FriendlyTeamAllAtOnce => Some(glyphs::ALL_FRIENDS_SQUARE),
            EffectTarget::EnemySingle => Some(glyphs::ENEMY_SINGLE),
            EffectTarget::FriendlySingle => Some(glyphs::FRIENDLY_SINGLE),
            EffectTarget::Minion | EffectTarget::FriendlyMinion => Some(glyphs::MINION),
            EffectTarget::SelfTarget => Some(glyphs::SELF),
            EffectTarget::MultiTargetEnemy => Some(glyphs::ALL_ENEMIES_SELECT),
            EffectTarget::MultiTargetFriendly => Some(glyphs::ALL_FRIENDS_SELECT),
            EffectTarget::Invalid
            | EffectTarget::Spell
            | EffectTarget::SpecificSpells
            | EffectTarget::AtLeastOneEnemy
            | EffectTarget::PreselectedEnemySingle
            | EffectTarget::FriendlySingleNotMe => None,
        }
    }

    /// Does this effect apply to the whole battlefield?
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, EffectTarget::Global)
    }
}
