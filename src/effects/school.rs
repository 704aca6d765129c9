//! Magic schools.
//!
//! Rows store a school as an index into the game's school list. Index 0 and
//! 1 both mean "universal". Pet jewels ("prisms") instead carry the game's
//! hashed school id, resolved through `School::from_prism_id`.

use serde::{Deserialize, Serialize};

use crate::glyphs;

/// A school of magic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum School {
    #[default]
    Universal,
    Fire,
    Ice,
    Storm,
    Myth,
    Life,
    Death,
    Balance,
    Star,
    Sun,
    Moon,
    Gardening,
    Shadow,
    Fishing,
    Cantrips,
    CastleMagic,
    WhirlyBurly,
}

/// The six elemental/spirit schools that spells enumerate per-school.
pub const PRIMARY_SCHOOLS: [School; 6] = [
    School::Fire,
    School::Ice,
    School::Storm,
    School::Myth,
    School::Life,
    School::Death,
];

const EQUIP_EXCEPT_BIT: u32 = 1 << 31;

impl School {
    /// Resolve a school index as stored on effect rows.
    #[must_use]
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            0 | 1 => School::Universal,
            2 => School::Fire,
            3 => School::Ice,
            4 => School::Storm,
            5 => School::Myth,
            6 => School::Life,
            7 => School::Death,
            8 => School::Balance,
            9 => School::Star,
            10 => School::Sun,
            11 => School::Moon,
            12 => School::Gardening,
            13 => School::Shadow,
            14 => School::Fishing,
            15 => School::Cantrips,
            16 => School::CastleMagic,
            17 => School::WhirlyBurly,
            _ => return None,
        })
    }

    /// Resolve a pet jewel prism value (the game's hashed school id).
    #[must_use]
    pub const fn from_prism_id(value: i64) -> Option<Self> {
        Some(match value {
            2343174 => School::Fire,
            72777 => School::Ice,
            83375795 => School::Storm,
            2448141 => School::Myth,
            2330892 => School::Life,
            78318724 => School::Death,
            1027491821 => School::Balance,
            2625203 => School::Star,
            78483 => School::Sun,
            2504141 => School::Moon,
            1429009101 => School::Shadow,
            _ => return None,
        })
    }

    /// Display glyph for this school.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            School::Universal => glyphs::UNIVERSAL,
            School::Fire => glyphs::FIRE,
            School::Ice => glyphs::ICE,
            School::Storm => glyphs::STORM,
            School::Myth => glyphs::MYTH,
            School::Life => glyphs::LIFE,
            School::Death => glyphs::DEATH,
            School::Balance => glyphs::BALANCE,
            School::Star => glyphs::STAR,
            School::Sun => glyphs::SUN,
            School::Moon => glyphs::MOON,
            School::Gardening => glyphs::GARDENING,
            School::Shadow => glyphs::SHADOW,
            School::Fishing => glyphs::FISHING,
            School::Cantrips => glyphs::CANTRIPS,
            School::CastleMagic => glyphs::CASTLEMAGIC,
            School::WhirlyBurly => glyphs::WHIRLYBURLY,
        }
    }

    /// Name as it appears in condition text (`Target School Fire`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            School::Universal => "Universal",
            School::Fire => "Fire",
            School::Ice => "Ice",
            School::Storm => "Storm",
            School::Myth => "Myth",
            School::Life => "Life",
            School::Death => "Death",
            School::Balance => "Balance",
            School::Star => "Star",
            School::Sun => "Sun",
            School::Moon => "Moon",
            School::Gardening => "Gardening",
            School::Shadow => "Shadow",
            School::Fishing => "Fishing",
            School::Cantrips => "Cantrips",
            School::CastleMagic => "Castlemagic",
            School::WhirlyBurly => "WhirlyBurly",
        }
    }

    /// Is this one of the six per-school variants spells enumerate?
    #[must_use]
    pub fn is_primary(self) -> bool {
        PRIMARY_SCHOOLS.contains(&self)
    }

    /// Schools whose spells cost energy instead of rolling accuracy.
    #[must_use]
    pub const fn uses_energy(self) -> bool {
        matches!(self, School::Gardening | School::Fishing | School::Cantrips)
    }
}

impl std::fmt::Display for School {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render an item's school restriction.
///
/// The high bit inverts the restriction ("all schools except"); zero means
/// no restriction at all. Returns `None` for an unknown school index.
#[must_use]
pub fn equip_school(raw: u32) -> Option<String> {
    let index = (raw & !EQUIP_EXCEPT_BIT) as i32;
    let glyph = School::from_raw(index)?.glyph();

    Some(if raw & EQUIP_EXCEPT_BIT != 0 {
        format!("All schools except {glyph}")
    } else if raw == 0 {
        glyph.to_string()
    } else {
        format!("{glyph} only")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(School::from_raw(0), Some(School::Universal));
        assert_eq!(School::from_raw(1), Some(School::Universal));
        assert_eq!(School::from_raw(2), Some(School::Fire));
        assert_eq!(School::from_raw(13), Some(School::Shadow));
        assert_eq!(School::from_raw(17), Some(School::WhirlyBurly));
        assert_eq!(School::from_raw(18), None);
        assert_eq!(School::from_raw(-1), None);
    }

    #[test]
    fn test_prism_ids() {
        assert_eq!(School::from_prism_id(2343174), Some(School::Fire));
        assert_eq!(School::from_prism_id(1027491821), Some(School::Balance));
        assert_eq!(School::from_prism_id(5), None);
    }

    #[test]
    fn test_primary_schools() {
        assert!(School::Fire.is_primary());
        assert!(School::Death.is_primary());
        assert!(!School::Balance.is_primary());
        assert!(!School::Shadow.is_primary());
    }

    #[test]
    fn test_equip_school() {
        assert_eq!(equip_school(0).unwrap(), glyphs::UNIVERSAL);
        assert_eq!(equip_school(2).unwrap(), format!("{} only", glyphs::FIRE));
        assert_eq!(
            equip_school(EQUIP_EXCEPT_BIT | 3).unwrap(),
            format!("All schools except {}", glyphs::ICE)
        );
        assert!(equip_school(40).is_none());
    }
}
