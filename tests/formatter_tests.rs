//! Effect formatter integration tests.
//!
//! These tests check single-line rendering rules that cut across kinds:
//! sign and placement of stat modifiers, duration suffixes, "all"
//! rewrites and parent-driven prefixes.

use spellscribe::core::EffectId;
use spellscribe::effects::{Disposition, EffectKind, EffectNode, EffectTarget, School};
use spellscribe::format::{render_line, LineFlags};
use spellscribe::glyphs::*;

fn leaf(kind: EffectKind) -> EffectNode {
    EffectNode::new(EffectId::new(2), EffectId::new(1), kind)
}

fn render(node: &EffectNode) -> String {
    render_line(node, LineFlags::default(), None)
}

// =============================================================================
// Modifier Placement
// =============================================================================

/// Incoming flat damage on one enemy: trap when positive, shield when negative.
#[test]
fn test_incoming_flat_sign_branch() {
    let base = leaf(EffectKind::ModifyIncomingDamageFlat)
        .with_school(School::Life)
        .with_target(EffectTarget::EnemySingle);

    let trap = render(&base.clone().with_param(5));
    assert!(trap.starts_with(&format!("+5 {LIFE}{TRAP}")), "{trap}");

    let shield = render(&base.with_param(-5));
    assert!(shield.starts_with(&format!("-5 {LIFE}{SHIELD}")), "{shield}");
}

/// With a duration the same kind becomes an aura.
#[test]
fn test_modifier_with_rounds_is_aura() {
    let node = leaf(EffectKind::ModifyOutgoingDamage)
        .with_param(25)
        .with_rounds(4)
        .with_school(School::Balance)
        .with_target(EffectTarget::SelfTarget);
    assert_eq!(render(&node), format!("+25% {BALANCE}{AURA} 4{ROUNDS} {SELF}"));
}

/// Global targets use the plain stat glyphs whatever the duration.
#[test]
fn test_modifier_global() {
    let node = leaf(EffectKind::ModifyIncomingDamage)
        .with_param(-30)
        .with_rounds(5)
        .with_target(EffectTarget::Global);
    assert_eq!(
        render(&node),
        format!("-30% {UNIVERSAL}{INCOMING}{DAMAGE} 5{ROUNDS} {GLOBAL}")
    );
}

/// Heal modifiers keep their stat glyph ahead of the hanging glyph.
#[test]
fn test_heal_modifier_keeps_stat_glyph() {
    let node = leaf(EffectKind::ModifyIncomingHeal)
        .with_param(-50)
        .with_target(EffectTarget::EnemySingle);
    assert_eq!(render(&node), format!("-50% {UNIVERSAL}{HEART}{JINX} {ENEMY_SINGLE}"));
}

// =============================================================================
// Suffix Rules
// =============================================================================

/// Damage never shows rounds; heal over time does.
#[test]
fn test_round_suffix_exclusion() {
    let damage = render(&leaf(EffectKind::Damage).with_param(100).with_rounds(3));
    assert!(!damage.contains(&format!("3{ROUNDS}")));

    let hot = render(&leaf(EffectKind::HealOverTime).with_param(100).with_rounds(3));
    assert!(hot.contains(&format!("3{ROUNDS}")));
}

/// -1 means "all" for removal, push and steal kinds.
#[test]
fn test_all_rewrite() {
    for kind in [EffectKind::RemoveCharm, EffectKind::StealWard, EffectKind::PushOverTime] {
        let line = render(&leaf(kind).with_param(-1).with_disposition(Disposition::Harmful));
        assert!(line.contains("all"), "{kind:?}: {line}");
        assert!(!line.contains("-1"), "{kind:?}: {line}");
    }
}

/// Target glyphs only for shapes that have one.
#[test]
fn test_target_suffixes() {
    let team = render(&leaf(EffectKind::Heal).with_param(9).with_target(EffectTarget::FriendlyTeam));
    assert_eq!(team, format!("9 {HEART} {ALL_FRIENDS}"));

    let spell = render(&leaf(EffectKind::Heal).with_param(9).with_target(EffectTarget::Spell));
    assert_eq!(spell, format!("9 {HEART}"));
}

// =============================================================================
// Parent Prefixes
// =============================================================================

/// Variable-pip children get their rank prefix only under that parent.
#[test]
fn test_variable_pip_prefix() {
    let node = leaf(EffectKind::Heal).with_param(200).with_rank(3);
    assert_eq!(
        render_line(&node, LineFlags::VARIABLE_PIP, None),
        format!("3 {PIP}: 200 {HEART}")
    );
    assert_eq!(render(&node), format!("200 {HEART}"));
}

/// Conversion children are numbered by rank; rank 0 is re-templated.
#[test]
fn test_conversion_prefix() {
    let ranked = leaf(EffectKind::ModifyOutgoingHeal)
        .with_param(20)
        .with_rank(3)
        .with_target(EffectTarget::SelfTarget);
    assert_eq!(
        render_line(&ranked, LineFlags::CONVERSION, None),
        format!("3: +20% {UNIVERSAL}{HEART}{BLADE} {SELF}")
    );

    let zero = ranked.with_rank(0);
    assert_eq!(
        render_line(&zero, LineFlags::CONVERSION, None),
        format!("1: 20% of effect to {UNIVERSAL}{HEART}{BLADE} {SELF}")
    );
}
