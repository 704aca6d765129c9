//! Stat modifier families.
//!
//! About thirty kinds (outgoing/incoming damage, heal, pierce, accuracy,
//! crit...) share one layout rule. Where the modifier sits depends on the
//! node, not the kind:
//! - global target: a plain stat line (`+25% <school><outgoing><damage>`)
//! - single target, no duration: a hanging effect (`+25% <school><blade>`)
//! - single target with a duration: an aura (`+25% <school><aura>`)
//!
//! The sign of `param` then picks the buff or debuff glyph of the pair. Each
//! family only supplies its glyph set.

use crate::effects::EffectNode;
use crate::glyphs::*;

/// Where a modifier lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// One-shot effect hanging on a single target (blade, trap, shield...).
    Hanging,
    /// Effect lasting several rounds on a single target.
    Aura,
    /// Battlefield-wide stat change.
    Global,
}

impl Placement {
    /// Placement for a node: global wins, then duration decides.
    #[must_use]
    pub fn of(node: &EffectNode) -> Self {
        if node.target.is_global() {
            Placement::Global
        } else if node.rounds == 0 {
            Placement::Hanging
        } else {
            Placement::Aura
        }
    }
}

/// Whether magnitudes are percentages or flat values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Flat,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Flat => "",
        }
    }
}

/// Glyph set of one modifier family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifierGlyphs {
    /// Stat glyph shown ahead of the hanging/aura glyph; empty when implied.
    pub stat: &'static str,
    /// Hanging glyphs, `[positive, negative]`.
    pub hanging: [&'static str; 2],
    /// Aura glyphs, `[positive, negative]`.
    pub aura: [&'static str; 2],
    /// Glyphs for the global form.
    pub global: &'static [&'static str],
}

const OUTGOING_HANGING: [&str; 2] = [BLADE, WEAKNESS];
const INCOMING_HANGING: [&str; 2] = [TRAP, SHIELD];
const RECEIVING_HANGING: [&str; 2] = [WARD, JINX];
const GOOD_AURA: [&str; 2] = [AURA, AURA_NEGATIVE];
const BAD_AURA: [&str; 2] = [AURA_NEGATIVE, AURA];

pub const OUTGOING_DAMAGE: ModifierGlyphs = ModifierGlyphs {
    stat: "",
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[OUTGOING, DAMAGE],
};

pub const OUTGOING_DAMAGE_FLAT: ModifierGlyphs = ModifierGlyphs {
    stat: "",
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[FLAT_DAMAGE],
};

pub const INCOMING_DAMAGE: ModifierGlyphs = ModifierGlyphs {
    stat: "",
    hanging: INCOMING_HANGING,
    aura: BAD_AURA,
    global: &[INCOMING, DAMAGE],
};

pub const INCOMING_DAMAGE_FLAT: ModifierGlyphs = ModifierGlyphs {
    stat: "",
    hanging: INCOMING_HANGING,
    aura: BAD_AURA,
    global: &[INCOMING, FLAT_DAMAGE],
};

pub const OUTGOING_HEAL: ModifierGlyphs = ModifierGlyphs {
    stat: HEART,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[OUTGOING, HEART],
};

pub const INCOMING_HEAL: ModifierGlyphs = ModifierGlyphs {
    stat: HEART,
    hanging: RECEIVING_HANGING,
    aura: GOOD_AURA,
    global: &[INCOMING, HEART],
};

pub const INCOMING_DAMAGE_OVER_TIME: ModifierGlyphs = ModifierGlyphs {
    stat: DOT,
    hanging: INCOMING_HANGING,
    aura: BAD_AURA,
    global: &[INCOMING, DOT],
};

pub const INCOMING_HEAL_OVER_TIME: ModifierGlyphs = ModifierGlyphs {
    stat: HOT,
    hanging: RECEIVING_HANGING,
    aura: GOOD_AURA,
    global: &[INCOMING, HOT],
};

pub const OUTGOING_PIERCE: ModifierGlyphs = ModifierGlyphs {
    stat: PIERCE,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[PIERCE],
};

pub const INCOMING_PIERCE: ModifierGlyphs = ModifierGlyphs {
    stat: PIERCE,
    hanging: INCOMING_HANGING,
    aura: BAD_AURA,
    global: &[INCOMING, PIERCE],
};

pub const ACCURACY_MOD: ModifierGlyphs = ModifierGlyphs {
    stat: ACCURACY,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[ACCURACY],
};

pub const OUTGOING_DRAIN: ModifierGlyphs = ModifierGlyphs {
    stat: DAMAGE_OR_DRAIN,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[OUTGOING, DAMAGE_OR_DRAIN],
};

pub const INCOMING_DRAIN: ModifierGlyphs = ModifierGlyphs {
    stat: DAMAGE_OR_DRAIN,
    hanging: INCOMING_HANGING,
    aura: BAD_AURA,
    global: &[INCOMING, DAMAGE_OR_DRAIN],
};

pub const CRIT_RATING: ModifierGlyphs = ModifierGlyphs {
    stat: CRIT,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[CRIT],
};

pub const BLOCK_RATING: ModifierGlyphs = ModifierGlyphs {
    stat: BLOCK,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[BLOCK],
};

pub const POWER_PIP_CHANCE: ModifierGlyphs = ModifierGlyphs {
    stat: POWER_PIP,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[POWER_PIP],
};

pub const SHADOW_PIP_CHANCE: ModifierGlyphs = ModifierGlyphs {
    stat: SHADOW_PIP,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[SHADOW_PIP_STAT],
};

pub const STUN_RESISTANCE: ModifierGlyphs = ModifierGlyphs {
    stat: STUN_BLOCK,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[STUN_BLOCK],
};

pub const ARCHMASTERY_RATING: ModifierGlyphs = ModifierGlyphs {
    stat: ARCHMASTERY,
    hanging: OUTGOING_HANGING,
    aura: GOOD_AURA,
    global: &[ARCHMASTERY],
};

/// Swap a glyph for its protected variant, if it has one.
#[must_use]
pub fn protect(glyph: &'static str) -> &'static str {
    match glyph {
        BLADE => PBLADE,
        TRAP => PTRAP,
        WEAKNESS => PCURSE,
        SHIELD | WARD => PWARD,
        CHARM => PCHARM,
        JINX => PJINX,
        DOT => PDOT,
        HOT => PHOT,
        BOMB => PBOMB,
        ABSORB => PABSORB,
        other => other,
    }
}

/// `+N` for positive values, the bare number otherwise.
#[must_use]
pub fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Render a modifier line body for `node` using `glyphs`.
#[must_use]
pub fn modifier_phrase(node: &EffectNode, glyphs: &ModifierGlyphs, unit: Unit) -> String {
    let mut phrase = format!("{}{} {}", signed(node.param), unit.suffix(), node.school.glyph());
    let negative = usize::from(node.param < 0);

    match Placement::of(node) {
        Placement::Global => {
            for glyph in glyphs.global {
                phrase.push_str(glyph);
            }
        }
        Placement::Hanging => {
            let glyph = glyphs.hanging[negative];
            phrase.push_str(glyphs.stat);
            phrase.push_str(if node.protected { protect(glyph) } else { glyph });
        }
        Placement::Aura => {
            phrase.push_str(glyphs.stat);
            phrase.push_str(glyphs.aura[negative]);
        }
    }

    phrase
}
