//! Spell card header fields: pip cost, accuracy or energy cost, type glyph.

use serde::{Deserialize, Serialize};

use crate::effects::School;
use crate::glyphs::*;

/// General spell types, indexed by the stored type id.
pub const SPELL_TYPES: [&str; 19] = [
    NONE,
    HEART,
    DAMAGE,
    CHARM,
    WARD,
    AURA,
    GLOBAL,
    AOE,
    STEAL,
    MANIPULATION,
    ENCHANTMENT,
    POLYMORPH,
    CURSE,
    JINX,
    MUTATE,
    CLOAK,
    SHADOW,
    SHADOW,
    SHADOW,
];

pub const GARDENING_TYPES: [&str; 5] = [GROWING, PEST, SOIL, G_UTILITY, PROTECTION];

pub const FISHING_TYPES: [&str; 2] = [CATCHING, FS_UTILITY];

pub const CANTRIP_TYPES: [&str; 5] = [INCANTATION, BENEFICIAL, SIGIL, TELEPORTATION, RITUAL];

/// Extra school pips a spell costs on top of its rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolPips {
    pub shadow: u8,
    pub fire: u8,
    pub ice: u8,
    pub storm: u8,
    pub myth: u8,
    pub life: u8,
    pub death: u8,
    pub balance: u8,
}

impl SchoolPips {
    /// Pip glyphs in display order, repeated per pip.
    fn glyphs(&self) -> String {
        [
            (self.shadow, SHADOW_PIP),
            (self.fire, FIRE),
            (self.ice, ICE),
            (self.storm, STORM),
            (self.myth, MYTH),
            (self.life, LIFE),
            (self.death, DEATH),
            (self.balance, BALANCE),
        ]
        .iter()
        .map(|&(count, glyph)| glyph.repeat(usize::from(count)))
        .collect()
    }
}

/// The header data of one spell card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellHeader {
    pub rank: i32,
    /// X-pip spells spend every pip the caster has.
    pub x_pips: bool,
    pub pips: SchoolPips,
    pub accuracy: i32,
    pub energy: i32,
    pub school: School,
    pub type_index: usize,
}

impl SpellHeader {
    /// `Rank <rank> + <school pips>`, with `X` for X-pip spells.
    ///
    /// ```
    /// use spellscribe::spells::SpellHeader;
    ///
    /// let header = SpellHeader { rank: 4, ..SpellHeader::default() };
    /// assert_eq!(header.pip_cost(), "Rank 4");
    /// ```
    #[must_use]
    pub fn pip_cost(&self) -> String {
        let rank = if self.x_pips { "X".to_string() } else { self.rank.to_string() };
        let pips = self.pips.glyphs();
        if pips.is_empty() {
            format!("Rank {rank}")
        } else {
            format!("Rank {rank} + {pips}")
        }
    }

    /// Energy cost for gardening, fishing and cantrips; accuracy otherwise.
    #[must_use]
    pub fn accuracy_field(&self) -> String {
        if self.school.uses_energy() {
            format!("Costs {} {ENERGY}", self.energy)
        } else {
            format!("{}% {ACCURACY}", self.accuracy)
        }
    }

    /// Type glyph, looked up in the table for this spell's school.
    #[must_use]
    pub fn type_glyph(&self) -> Option<&'static str> {
        let table: &[&'static str] = match self.school {
            School::Gardening => &GARDENING_TYPES,
            School::Fishing => &FISHING_TYPES,
            School::Cantrips => &CANTRIP_TYPES,
            _ => &SPELL_TYPES,
        };
        table.get(self.type_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_cost() {
        let header = SpellHeader {
            rank: 7,
            pips: SchoolPips { shadow: 1, fire: 2, ..SchoolPips::default() },
            ..SpellHeader::default()
        };
        assert_eq!(header.pip_cost(), format!("Rank 7 + {SHADOW_PIP}{FIRE}{FIRE}"));

        let x = SpellHeader { x_pips: true, rank: 0, ..SpellHeader::default() };
        assert_eq!(x.pip_cost(), "Rank X");
    }

    #[test]
    fn test_accuracy_field() {
        let combat = SpellHeader { accuracy: 75, school: School::Fire, ..SpellHeader::default() };
        assert_eq!(combat.accuracy_field(), format!("75% {ACCURACY}"));

        let garden = SpellHeader { energy: 12, school: School::Gardening, ..SpellHeader::default() };
        assert_eq!(garden.accuracy_field(), format!("Costs 12 {ENERGY}"));
    }

    #[test]
    fn test_type_tables() {
        let damage = SpellHeader { type_index: 2, school: School::Storm, ..SpellHeader::default() };
        assert_eq!(damage.type_glyph(), Some(DAMAGE));

        let soil = SpellHeader { type_index: 2, school: School::Gardening, ..SpellHeader::default() };
        assert_eq!(soil.type_glyph(), Some(SOIL));

        let bogus = SpellHeader { type_index: 9, school: School::Fishing, ..SpellHeader::default() };
        assert_eq!(bogus.type_glyph(), None);
    }
}
