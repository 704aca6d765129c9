//! Leaf effect formatting.
//!
//! `render_line` turns one node into one display line:
//!
//! 1. prefix: `<rank> <pip>: ` under a variable-pip parent, `<rank>: ` under
//!    a conversion parent with a non-zero rank
//! 2. the kind's phrase
//! 3. ` <rounds><rounds glyph>` unless the kind uses rounds for something else
//! 4. `-1` becomes `all` for remove/push/steal kinds
//! 5. rank-0 conversion children are re-templated (`+` -> `1: `,
//!    `% ` -> `% of effect to `)
//! 6. ` <target glyph>` when the target shape has one
//!
//! Kinds that reference another record take a resolved name; `format_leaf`
//! does the async lookup and falls back to the raw id.

use tracing::{debug, warn};

use crate::core::LookupKind;
use crate::effects::{Disposition, EffectKind, EffectNode, School};
use crate::glyphs::*;
use crate::names::NameResolver;

use super::modifiers::{self, modifier_phrase, protect, signed, Unit};

/// How the parent of a node lays out its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineFlags {
    /// Parent is a variable-pip node: prefix with the X-pip rank.
    pub variable_pip: bool,
    /// Parent is a conversion branch: prefix with the conversion ordinal.
    pub conversion: bool,
}

impl LineFlags {
    /// Flags for children of a variable-pip parent.
    pub const VARIABLE_PIP: LineFlags = LineFlags { variable_pip: true, conversion: false };

    /// Flags for children of a conversion-branch parent.
    pub const CONVERSION: LineFlags = LineFlags { variable_pip: false, conversion: true };
}

/// Which record a kind's `param` points at, if any.
#[must_use]
pub fn name_lookup(kind: EffectKind) -> Option<LookupKind> {
    match kind {
        EffectKind::AddSpellToDeck | EffectKind::AddSpellToHand | EffectKind::ModifyCardMutation => {
            Some(LookupKind::Spell)
        }
        EffectKind::SummonCreature
        | EffectKind::SpawnCreature
        | EffectKind::Polymorph
        | EffectKind::ShadowCreature
        | EffectKind::KillCreature => Some(LookupKind::Mob),
        _ => None,
    }
}

/// Format one node, resolving a referenced name first if the kind needs one.
///
/// Lookup failures degrade to the raw id; they never fail the line.
pub async fn format_leaf(node: &EffectNode, flags: LineFlags, names: &dyn NameResolver) -> String {
    if !node.kind.emits_line() {
        return String::new();
    }

    let name = match name_lookup(node.kind) {
        Some(what) => {
            let found = match what {
                LookupKind::Spell => names.spell_name(node.param).await,
                LookupKind::Mob => names.mob_name(node.param).await,
            };
            Some(found.unwrap_or_else(|err| {
                warn!(id = %node.id, error = %err, "name lookup failed, showing raw id");
                node.param.to_string()
            }))
        }
        None => None,
    };

    render_line(node, flags, name.as_deref())
}

/// Format one node with an already resolved name.
///
/// Returns an empty string for kinds that never emit a line.
#[must_use]
pub fn render_line(node: &EffectNode, flags: LineFlags, name: Option<&str>) -> String {
    if !node.kind.emits_line() {
        return String::new();
    }

    let mut line = String::new();
    if flags.variable_pip {
        line.push_str(&format!("{} {PIP}: ", node.rank));
    } else if flags.conversion && node.rank != 0 {
        line.push_str(&format!("{}: ", node.rank));
    }

    let fallback = node.param.to_string();
    line.push_str(&phrase(node, name.unwrap_or(&fallback)));

    if node.rounds > 0 && !node.kind.hides_duration() {
        line.push_str(&format!(" {}{ROUNDS}", node.rounds));
    }

    if node.param == -1 && node.kind.counts_all_on_minus_one() {
        line = line.replacen("-1", "all", 1);
    }

    if flags.conversion && node.rank == 0 {
        if let Some(rest) = line.strip_prefix('+') {
            line = format!("1: {rest}");
        }
        line = line.replace("% ", "% of effect to ");
    }

    if let Some(glyph) = node.target.glyph() {
        line.push(' ');
        line.push_str(glyph);
    }

    line
}

fn charm(disposition: Disposition) -> &'static str {
    match disposition {
        Disposition::Both => CHARM,
        Disposition::Beneficial => BLADE,
        Disposition::Harmful => WEAKNESS,
    }
}

fn ward(disposition: Disposition) -> &'static str {
    match disposition {
        Disposition::Both => WARD,
        Disposition::Beneficial => SHIELD,
        Disposition::Harmful => TRAP,
    }
}

fn over_time(disposition: Disposition) -> String {
    match disposition {
        Disposition::Both => format!("{DOT}{HOT}"),
        Disposition::Beneficial => HOT.to_string(),
        Disposition::Harmful => DOT.to_string(),
    }
}

fn aura(disposition: Disposition) -> String {
    match disposition {
        Disposition::Both => format!("{AURA}{AURA_NEGATIVE}"),
        Disposition::Beneficial => AURA.to_string(),
        Disposition::Harmful => AURA_NEGATIVE.to_string(),
    }
}

fn maybe_protected(node: &EffectNode, glyph: &'static str) -> &'static str {
    if node.protected {
        protect(glyph)
    } else {
        glyph
    }
}

fn percent_of(modifier: f64) -> i64 {
    (modifier * 100.0).round() as i64
}

fn prism(param: i64) -> String {
    match School::from_prism_id(param) {
        Some(school) => school.glyph().to_string(),
        None => {
            debug!(param, "unknown prism school id");
            param.to_string()
        }
    }
}

/// The kind-specific body of a line.
fn phrase(node: &EffectNode, name: &str) -> String {
    use EffectKind as K;

    let p = node.param;
    let s = node.school.glyph();
    let d = node.disposition;

    match node.kind {
        K::Invalid | K::AddCombatTriggerList | K::RemoveCombatTriggerList | K::ConvertHangingEffect => {
            String::new()
        }

        // === Damage and healing ===
        K::Damage => format!("{p} {s}{DAMAGE}"),
        K::DamageNoCrit => format!("{p} {s}{DAMAGE} (no {CRIT})"),
        K::DamagePerTotalPipPower => format!("{p} {s}{DAMAGE} per {PIP}"),
        K::MaxHealthDamage => format!("{p}% Max {HEALTH} {s}{DAMAGE}"),
        K::BacklashDamage => format!("{p} {s}{DAMAGE} Backlash"),
        K::DamageOverTime => format!("{p} {s}{}", maybe_protected(node, DOT)),
        K::DeferredDamage => format!("{p} {s}{}", maybe_protected(node, BOMB)),
        K::DetonateOverTime => format!("Detonate {p} {s}{}", over_time(d)),
        K::StealHealth if node.heal_modifier != 0.0 => {
            format!("{p} {s}{DAMAGE_OR_DRAIN} ({}% {HEART})", percent_of(node.heal_modifier))
        }
        K::StealHealth => format!("{p} {s}{DAMAGE_OR_DRAIN}"),
        K::Heal => format!("{p} {HEART}"),
        K::HealPercent => format!("{p}% {HEART}"),
        K::SetHealPercent => format!("Set {HEALTH} to {p}%"),
        K::MaxHealthHeal => format!("{p}% Max {HEALTH} {HEART}"),
        K::HealOverTime => format!("{p} {}", maybe_protected(node, HOT)),
        K::HealByWard => format!("{p} {HEART} per {WARD}"),
        K::Afterlife => format!("{p} {HEART}{AFTERLIFE}"),
        K::InstantKill => format!("Instant Kill {s}"),
        K::DivideDamage => format!("Divide {s}{DAMAGE} between targets"),
        K::Intercept if node.heal_modifier != 0.0 => {
            format!("Intercept {}% {DAMAGE}", percent_of(node.heal_modifier))
        }
        K::Intercept => format!("Intercept {p}% {DAMAGE}"),

        // === Hanging effect manipulation ===
        K::ReduceOverTime => format!("Reduce {} by {p}{ROUNDS}", over_time(d)),
        K::PushCharm => format!("Push {p} {}", charm(d)),
        K::StealCharm => format!("Steal {p} {}", charm(d)),
        K::PushWard => format!("Push {p} {}", ward(d)),
        K::StealWard => format!("Steal {p} {}", ward(d)),
        K::PushOverTime => format!("Push {p} {}", over_time(d)),
        K::StealOverTime => format!("Steal {p} {}", over_time(d)),
        K::RemoveCharm => format!("Remove {p} {}", charm(d)),
        K::RemoveWard => format!("Remove {p} {}", ward(d)),
        K::RemoveOverTime => format!("Remove {p} {}", over_time(d)),
        K::RemoveAura => format!("Remove {}", aura(d)),
        K::PushConvertedCharm => format!("Push {p} converted {}", charm(d)),
        K::StealConvertedCharm => format!("Steal {p} converted {}", charm(d)),
        K::PushConvertedWard => format!("Push {p} converted {}", ward(d)),
        K::StealConvertedWard => format!("Steal {p} converted {}", ward(d)),
        K::PushConvertedOverTime => format!("Push {p} converted {}", over_time(d)),
        K::StealConvertedOverTime => format!("Steal {p} converted {}", over_time(d)),
        K::RemoveConvertedCharm => format!("Remove {p} converted {}", charm(d)),
        K::RemoveConvertedWard => format!("Remove {p} converted {}", ward(d)),
        K::RemoveConvertedOverTime => format!("Remove {p} converted {}", over_time(d)),
        K::SwapAll => format!("Swap all {CHARM}{WARD}{DOT}{HOT}"),
        K::SwapCharm => format!("Swap {p} {}", charm(d)),
        K::SwapWard => format!("Swap {p} {}", ward(d)),
        K::SwapOverTime => format!("Swap {p} {}", over_time(d)),
        K::ModifyOverTimeDuration => format!("{}{ROUNDS} to {}", signed(p), over_time(d)),
        K::CloakedCharm if node.protected => format!("{p}% {s}{PCHARM}"),
        K::CloakedCharm => format!("{p}% {s}{CLOAK}{}", charm(d)),
        K::CloakedWard if node.protected => format!("{p}% {s}{PWARD}"),
        K::CloakedWard => format!("{p}% {s}{CLOAK}{}", ward(d)),
        K::CloakedWardNoRemove => format!("{p}% {s}{CLOAK}{} (unremovable)", ward(d)),
        K::RevealCloak => format!("Reveal {CLOAK}"),
        K::ProtectBeneficial => format!("Protect {p} {CHARM}{WARD}"),
        K::ProtectHarmful => format!("Protect {p} {WEAKNESS}{TRAP}"),

        // === Outgoing modifiers ===
        K::ModifyOutgoingDamage => modifier_phrase(node, &modifiers::OUTGOING_DAMAGE, Unit::Percent),
        K::ModifyOutgoingDamageFlat => modifier_phrase(node, &modifiers::OUTGOING_DAMAGE_FLAT, Unit::Flat),
        K::ModifyOutgoingHeal => modifier_phrase(node, &modifiers::OUTGOING_HEAL, Unit::Percent),
        K::ModifyOutgoingHealFlat => modifier_phrase(node, &modifiers::OUTGOING_HEAL, Unit::Flat),
        K::ModifyOutgoingArmorPiercing => modifier_phrase(node, &modifiers::OUTGOING_PIERCE, Unit::Percent),
        K::ModifyOutgoingStealHealth => modifier_phrase(node, &modifiers::OUTGOING_DRAIN, Unit::Percent),
        K::ModifyAccuracy => modifier_phrase(node, &modifiers::ACCURACY_MOD, Unit::Percent),
        K::CritBoost | K::CritBoostSchoolSpecific => {
            modifier_phrase(node, &modifiers::CRIT_RATING, Unit::Flat)
        }
        K::CritBlock => modifier_phrase(node, &modifiers::BLOCK_RATING, Unit::Flat),
        K::ModifyPowerPipChance => modifier_phrase(node, &modifiers::POWER_PIP_CHANCE, Unit::Percent),
        K::ModifyShadowPipChance => modifier_phrase(node, &modifiers::SHADOW_PIP_CHANCE, Unit::Percent),
        K::StunResist => modifier_phrase(node, &modifiers::STUN_RESISTANCE, Unit::Percent),
        K::ModifyArchmastery => modifier_phrase(node, &modifiers::ARCHMASTERY_RATING, Unit::Flat),

        // === Incoming modifiers ===
        K::ModifyIncomingDamage => modifier_phrase(node, &modifiers::INCOMING_DAMAGE, Unit::Percent),
        K::ModifyIncomingDamageFlat => modifier_phrase(node, &modifiers::INCOMING_DAMAGE_FLAT, Unit::Flat),
        K::ModifyIncomingHeal => modifier_phrase(node, &modifiers::INCOMING_HEAL, Unit::Percent),
        K::ModifyIncomingHealFlat => modifier_phrase(node, &modifiers::INCOMING_HEAL, Unit::Flat),
        K::ModifyIncomingArmorPiercing => modifier_phrase(node, &modifiers::INCOMING_PIERCE, Unit::Percent),
        K::ModifyIncomingStealHealth => modifier_phrase(node, &modifiers::INCOMING_DRAIN, Unit::Percent),
        K::ModifyIncomingDamageOverTime => {
            modifier_phrase(node, &modifiers::INCOMING_DAMAGE_OVER_TIME, Unit::Percent)
        }
        K::ModifyIncomingHealOverTime => {
            modifier_phrase(node, &modifiers::INCOMING_HEAL_OVER_TIME, Unit::Percent)
        }
        K::MaximumIncomingDamage => format!("Max {p} {s}{DAMAGE} taken"),
        K::ModifyIncomingDamageType => format!("{s}{INCOMING}{DAMAGE} becomes {}", prism(p)),
        K::ModifyOutgoingDamageType => format!("{s}{OUTGOING}{DAMAGE} becomes {}", prism(p)),

        // === Absorbs and bounces ===
        K::AbsorbDamage => format!("{p} {s}{}", maybe_protected(node, ABSORB)),
        K::AbsorbHeal => format!("{p} {HEART}{}", maybe_protected(node, ABSORB)),
        K::BounceNext => format!("Bounce {p} {HEART} to next"),
        K::BouncePrevious => format!("Bounce {p} {HEART} to previous"),
        K::BounceBack => format!("Bounce {p} {HEART} back"),
        K::BounceAll => format!("Bounce {p} {HEART} to all"),
        K::ModifyBacklash => format!("{} Backlash", signed(p)),

        // === Pips ===
        K::ModifyPips => format!("{} {PIP}", signed(p)),
        K::ModifyPowerPips => format!("{} {POWER_PIP}", signed(p)),
        K::ModifyShadowPips => format!("{} {SHADOW_PIP}", signed(p)),
        K::ModifySchoolPips => format!("{} {s}", signed(p)),
        K::ModifyPipRoundRate => format!("{} {PIP} per {ROUNDS}", signed(p)),
        K::PipConversion => format!("{p} {PIP_CONVERSION} {s} at rank {}", node.pip_num),
        K::PowerPipConversion => format!("{p}% {PIP} to {POWER_PIP}"),
        K::SuspendPips => format!("Suspend {PIP}"),
        K::ResumePips => format!("Resume {PIP}"),

        // === Control ===
        K::Stun if node.rounds > 0 => format!("{}{ROUNDS} {STUN}", node.rounds),
        K::Stun => STUN.to_string(),
        K::StunBlock => format!("{p} {STUN_BLOCK}"),
        K::RemoveStunBlock => format!("Remove {p} {STUN_BLOCK}"),
        K::MindControl if node.rounds > 0 => format!("{}{ROUNDS} Mind Control", node.rounds),
        K::MindControl => "Mind Control".to_string(),
        K::Confusion => format!("{p}% Confusion"),
        K::ConfusionBlock => format!("{p} Confusion Block"),
        K::Dispel => format!("{s}{DISPEL}"),
        K::DispelBlock => format!("{p} {DISPEL} Block"),
        K::Dampen => "Dampen".to_string(),
        K::DelayCast => format!("Delay cast {p}{ROUNDS}"),
        K::ModifyHate => format!("{} {THREAT}", signed(p)),
        K::Taunt => format!("{p} {THREAT} Taunt"),
        K::Pacify => format!("{p} {THREAT} Pacify"),
        K::Untargetable => "Untargetable".to_string(),
        K::MakeTargetable => "Make targetable".to_string(),
        K::ForceTargetable => "Force targetable".to_string(),
        K::RemoveTargetRestriction => "Remove target restriction".to_string(),
        K::Vanish => "Vanish".to_string(),
        K::StopVanish => "Stop Vanish".to_string(),
        K::AutoPass => "Auto pass".to_string(),
        K::StopAutoPass => "Stop auto pass".to_string(),
        K::ExitCombat => "Exit combat".to_string(),
        K::TeleportPlayer => "Teleport".to_string(),
        K::Reshuffle => "Reshuffle".to_string(),
        K::Clue => format!("Reveal {s}{RESIST}"),
        K::CollectEssence => "Collect Essence".to_string(),
        K::ModifyRank => format!("{} Rank", signed(p)),

        // === Creatures and transformations ===
        K::Polymorph => format!("{POLYMORPH} {name}"),
        K::UnPolymorph => format!("Remove {POLYMORPH}"),
        K::SummonCreature => format!("Summon {MINION} {name}"),
        K::SpawnCreature => format!("Spawn {name}"),
        K::KillCreature => format!("Kill {name}"),
        K::ShadowSelf => format!("{SHADOW} Shadow Self"),
        K::ShadowCreature => format!("{SHADOW} {name}"),
        K::ModifyShadowCreatureLevel => format!("{} {SHADOW} creature level", signed(p)),
        K::SelectShadowCreatureAttackTarget => format!("{SHADOW} creature picks target"),
        K::ShadowDecrementTurn => format!("{}{ROUNDS} {SHADOW}", signed(p)),

        // === Cards ===
        K::AddSpellToDeck => format!("Add {name} to deck"),
        K::AddSpellToHand => format!("Add {name} to hand"),
        K::ModifyCardMutation => format!("{MUTATE} to {name}"),
        K::ModifyCardCloak => format!("{CLOAK} card"),
        K::ModifyCardRank => format!("{} Rank {ENCHANTMENT}", signed(p)),
        K::ModifyCardDamage => format!("{} {s}{DAMAGE} {ENCHANTMENT}", signed(p)),
        K::ModifyCardDamageByRank => format!("{} {s}{DAMAGE} per Rank {ENCHANTMENT}", signed(p)),
        K::ModifyCardAccuracy => format!("{}% {ACCURACY} {ENCHANTMENT}", signed(p)),
        K::ModifyCardArmorPiercing => format!("{}% {PIERCE} {ENCHANTMENT}", signed(p)),
        K::ModifyCardHeal => format!("{} {HEART} {ENCHANTMENT}", signed(p)),
        K::ModifyCardCharm => format!("{}% {CHARM} {ENCHANTMENT}", signed(p)),
        K::ModifyCardWard => format!("{}% {WARD} {ENCHANTMENT}", signed(p)),
        K::ModifyCardAbsorb => format!("{} {ABSORB} {ENCHANTMENT}", signed(p)),
        K::ModifyCardOutgoingDamage => format!("{}% {OUTGOING}{DAMAGE} {ENCHANTMENT}", signed(p)),
        K::ModifyCardOutgoingAccuracy => format!("{}% {OUTGOING}{ACCURACY} {ENCHANTMENT}", signed(p)),
        K::ModifyCardOutgoingHeal => format!("{}% {OUTGOING}{HEART} {ENCHANTMENT}", signed(p)),
        K::ModifyCardOutgoingArmorPiercing => {
            format!("{}% {OUTGOING}{PIERCE} {ENCHANTMENT}", signed(p))
        }
        K::ModifyCardIncomingDamage => format!("{}% {INCOMING}{DAMAGE} {ENCHANTMENT}", signed(p)),
        K::ProtectCardBeneficial => format!("Protect {ENCHANTMENT} from removal"),
        K::ProtectCardHarmful => format!("Protect from harmful {ENCHANTMENT}"),
    }
}
