//! Type-icon names used inside spell description templates.
//!
//! Templates reference icons by their texture name (`$Damage_image$`,
//! `$FireSchoolIcon$`, ...). Unknown names render as the random glyph.

use super::*;

/// Map a template icon name to its glyph.
///
/// ```
/// use spellscribe::glyphs::{icon_glyph, DAMAGE, RANDOM};
///
/// assert_eq!(icon_glyph("Damage_image"), DAMAGE);
/// assert_eq!(icon_glyph("Not_An_Icon"), RANDOM);
/// ```
#[must_use]
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Damage_image" => DAMAGE,
        "Heal_image" => HEART,
        "Accuracy_image" => ACCURACY,
        "Afterlife_image" => AFTERLIFE,
        "All_Enemies_Square_image" | "All_Enemies_Wide_image" | "All_Enemies_Wide" => ALL_ENEMIES_SQUARE,
        "All_Friends_Square_image" | "All_Friends_Wide_image" | "All_Friends_Wide" => ALL_FRIENDS_SQUARE,
        "Armor_Penetration_image" => PIERCE,
        "BlockRating_image" | "Block_image" => BLOCK,
        "CriticalRating_image" => CRIT,
        "Damage_or_drain_image" => DAMAGE_OR_DRAIN,
        "Elemental_image" | "ElementalSchoolIcon" => ELEMENTAL,
        "MoonSchoolIcon" => MOON,
        "FireSchoolIcon" => FIRE,
        "IceSchoolIcon" => ICE,
        "StormSchoolIcon" => STORM,
        "BalanceSchoolIcon" => BALANCE,
        "LifeSchoolIcon" => LIFE,
        "DeathSchoolIcon" => DEATH,
        "MythSchoolIcon" => MYTH,
        "ShadowSchoolIcon" => SHADOW,
        "SpiritSchoolIcon" => SPIRIT,
        "Incoming_image" => INCOMING,
        "Outgoing_image" => OUTGOING,
        "Self_image" => SELF,
        "ShadowPips_image" | "ShadowPips02_image" => SHADOW_PIP_STAT,
        "All_Enemies_image" => ALL_ENEMIES,
        "All_Friends_image" => ALL_FRIENDS,
        "Dispel_image" => DISPEL,
        "Minion_image" => MINION,
        "Rounds_image" => ROUNDS,
        "Stun_image" => STUN,
        "Threat_image" => THREAT,
        "Absorb_image" => ABSORB,
        "Aura_Pos_image" => AURA,
        "Aura_Neg_image" => AURA_NEGATIVE,
        "Blade_image" => BLADE,
        "Curse_image" => CURSE,
        "Damage_Flat_image" => FLAT_DAMAGE,
        "OT_Damage_image" => DOT,
        "DeferredDamage_image" => BOMB,
        "pDeferredDamage_image" => PBOMB,
        "Global_image" => GLOBAL,
        "OT_Heal_image" => HOT,
        "Jinx_image" => JINX,
        "pAbsorb_image" => PABSORB,
        "pBlade_image" => PBLADE,
        "pCharm_image" => PCHARM,
        "pCurse_image" => PCURSE,
        "pOT_Damage_image" => PDOT,
        "pOT_Heal_image" => PHOT,
        "Pips_image" => PIP,
        "pJinx_image" => PJINX,
        "Polymorph_image" => POLYMORPH,
        "PowerPips_image" => POWER_PIP,
        "pTrap_image" => PTRAP,
        "pWard_image" => PWARD,
        "Resist_image" => RESIST,
        "Resist_Flat_image" => FLAT_RESIST,
        "Steal_image" => STEAL,
        "StunResist_image" => STUN_BLOCK,
        "Trap_image" => TRAP,
        "Ward_image" => WARD,
        "Charm_image" => CHARM,
        "All_Enemies_Select" => ALL_ENEMIES_SELECT,
        "All_Friends_Select" => ALL_FRIENDS_SELECT,
        "Chromatic_Caster_image" => CHROMATIC_CASTER,
        "Chromatic_Target_image" => CHROMATIC_TARGET,
        "Shield_image" => SHIELD,
        "Weakness_image" => WEAKNESS,
        _ => RANDOM,
    }
}
