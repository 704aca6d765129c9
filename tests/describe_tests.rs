//! Description generation integration tests.
//!
//! These tests run whole effect forests through `generate_description`
//! and `Describer`, including JSON-loaded rows and async name lookups.

use proptest::prelude::*;
use spellscribe::core::{DescribeConfig, EffectId};
use spellscribe::describe::{generate_description, Describer};
use spellscribe::effects::{
    EffectForest, EffectKind, EffectNode, EffectRow, EffectTarget, NodeClass, School,
    PRIMARY_SCHOOLS,
};
use spellscribe::glyphs::*;
use spellscribe::names::{NameTable, NoNames};

fn id(raw: i64) -> EffectId {
    EffectId::new(raw)
}

fn forest(nodes: Vec<EffectNode>) -> EffectForest {
    EffectForest::from_nodes(nodes)
}

/// Route library logs to the test output (`RUST_LOG=spellscribe=debug`).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Basic Traversal
// =============================================================================

/// A plain wrapper renders nothing itself and recurses into its child.
#[tokio::test]
async fn test_single_damage_spell() {
    let forest = forest(vec![
        EffectNode::wrapper(id(1), EffectId::ROOT, NodeClass::Plain),
        EffectNode::new(id(2), id(1), EffectKind::Damage)
            .with_param(100)
            .with_school(School::Fire)
            .with_target(EffectTarget::EnemySingle),
    ]);

    let text = generate_description(&forest, &NoNames).await;
    assert_eq!(text, format!("100 {FIRE}{DAMAGE} {ENEMY_SINGLE}\n"));
}

/// Siblings come out in row order, not id order.
#[tokio::test]
async fn test_row_order_is_kept() {
    let forest = forest(vec![
        EffectNode::new(id(9), EffectId::ROOT, EffectKind::Heal).with_param(1),
        EffectNode::new(id(3), EffectId::ROOT, EffectKind::Heal).with_param(2),
        EffectNode::new(id(5), EffectId::ROOT, EffectKind::Heal).with_param(3),
    ]);

    let text = generate_description(&forest, &NoNames).await;
    assert_eq!(text, format!("1 {HEART}\n2 {HEART}\n3 {HEART}\n"));
}

/// Invalid nodes contribute nothing, whatever their other fields say.
#[tokio::test]
async fn test_invalid_nodes_are_silent() {
    let forest = forest(vec![EffectNode::new(id(1), EffectId::ROOT, EffectKind::Invalid)
        .with_param(999)
        .with_rounds(4)
        .with_target(EffectTarget::Global)
        .with_school(School::Myth)]);

    assert_eq!(generate_description(&forest, &NoNames).await, "");
}

/// Nested branch classes each produce their header and trailing blank line.
#[tokio::test]
async fn test_conditional_and_conversion_headers() {
    let forest = forest(vec![
        EffectNode::wrapper(id(1), EffectId::ROOT, NodeClass::ConditionalBranch)
            .with_condition("Target has Blade"),
        EffectNode::new(id(2), id(1), EffectKind::Damage).with_param(300),
        EffectNode::wrapper(id(3), EffectId::ROOT, NodeClass::ConversionBranch)
            .with_condition("Caster has Trap"),
        EffectNode::new(id(4), id(3), EffectKind::ModifyIncomingDamage)
            .with_param(40)
            .with_target(EffectTarget::EnemySingle),
    ]);

    let text = generate_description(&forest, &NoNames).await;
    assert_eq!(
        text,
        format!(
            "Target {CHARM}:\n300 {UNIVERSAL}{DAMAGE}\n\n\
             Caster {TRAP}:\n1: 40% of effect to {UNIVERSAL}{TRAP} {ENEMY_SINGLE}\n\n"
        )
    );
}

/// Marker kinds emit nothing but their children still render.
#[tokio::test]
async fn test_marker_kind_passes_through() {
    let forest = forest(vec![
        EffectNode::new(id(1), EffectId::ROOT, EffectKind::ConvertHangingEffect),
        EffectNode::new(id(2), id(1), EffectKind::Heal).with_param(75),
    ]);

    assert_eq!(generate_description(&forest, &NoNames).await, format!("75 {HEART}\n"));
}

// =============================================================================
// Name Lookups
// =============================================================================

/// Names resolve in traversal order; a miss falls back to the raw id.
#[tokio::test]
async fn test_names_and_fallbacks() {
    let names = NameTable::new().with_mob(500, "Ice Colossus").with_spell(42, "Tempest");
    let forest = forest(vec![
        EffectNode::new(id(1), EffectId::ROOT, EffectKind::SummonCreature).with_param(500),
        EffectNode::new(id(2), EffectId::ROOT, EffectKind::AddSpellToDeck).with_param(42),
        EffectNode::new(id(3), EffectId::ROOT, EffectKind::KillCreature).with_param(77),
    ]);

    let text = generate_description(&forest, &names).await;
    assert_eq!(
        text,
        format!("Summon {MINION} Ice Colossus\nAdd Tempest to deck\nKill 77\n")
    );
}

// =============================================================================
// Post-Processing
// =============================================================================

/// Repeated identical lines fold into one with a count.
#[tokio::test]
async fn test_duplicate_lines_fold() {
    let nodes = (1..=3)
        .map(|n| {
            EffectNode::new(id(n), EffectId::ROOT, EffectKind::Damage)
                .with_param(50)
                .with_school(School::Storm)
                .with_target(EffectTarget::EnemySingle)
        })
        .collect();

    let text = generate_description(&forest(nodes), &NoNames).await;
    assert_eq!(text, format!("50 {STORM}{DAMAGE} {ENEMY_SINGLE} x3\n"));
}

/// Folding can be turned off through the config.
#[tokio::test]
async fn test_folding_disabled() {
    let nodes = (1..=2)
        .map(|n| EffectNode::new(id(n), EffectId::ROOT, EffectKind::Heal).with_param(10))
        .collect();

    let describer = Describer::new(NoNames).with_config(DescribeConfig::new().without_folding());
    let text = describer.describe(&forest(nodes)).await;
    assert_eq!(text, format!("10 {HEART}\n10 {HEART}\n"));
}

fn per_school_forest(schools: &[School]) -> EffectForest {
    let mut nodes = Vec::new();
    for (i, school) in schools.iter().enumerate() {
        let branch = id(100 + i as i64);
        nodes.push(
            EffectNode::wrapper(branch, EffectId::ROOT, NodeClass::ConditionalBranch)
                .with_condition(format!("Target School {}", school.name())),
        );
        nodes.push(
            EffectNode::new(id(200 + i as i64), branch, EffectKind::Damage)
                .with_param(250)
                .with_school(*school),
        );
    }
    forest(nodes)
}

/// Six per-school sections condense into one chromatic section.
#[tokio::test]
async fn test_six_school_sections_condense() {
    let text = generate_description(&per_school_forest(&PRIMARY_SCHOOLS), &NoNames).await;
    assert_eq!(
        text,
        format!("Target {ELEMENTAL}{SPIRIT}:\n250 {CHROMATIC_TARGET}{DAMAGE}\n\n")
    );
}

/// Five per-school sections stay as they are.
#[tokio::test]
async fn test_five_school_sections_stay() {
    let text = generate_description(&per_school_forest(&PRIMARY_SCHOOLS[..5]), &NoNames).await;
    assert_eq!(text.matches(":\n").count(), 5);
    assert!(text.contains(&format!("Target {FIRE}:\n250 {FIRE}{DAMAGE}")));
    assert!(!text.contains(CHROMATIC_TARGET));
}

/// A lower threshold from the config condenses fewer sections.
#[tokio::test]
async fn test_custom_threshold() {
    let describer =
        Describer::new(NoNames).with_config(DescribeConfig::new().with_condense_threshold(3));
    let text = describer.describe(&per_school_forest(&PRIMARY_SCHOOLS[..3])).await;
    assert!(text.contains(CHROMATIC_TARGET));
}

// =============================================================================
// Row Ingestion
// =============================================================================

/// Rows loaded from JSON go through the same pipeline.
#[tokio::test]
async fn test_rows_from_json() {
    let rows: Vec<EffectRow> = serde_json::from_str(
        r#"[
            {"id": 10, "spell_id": 7, "parent_id": -1, "node_class": 2},
            {"id": 11, "spell_id": 7, "parent_id": 10, "effect_kind": 1, "param": 90,
             "school": 3, "rank": 1, "target": 8},
            {"id": 12, "spell_id": 7, "parent_id": 10, "effect_kind": 1, "param": 180,
             "school": 3, "rank": 2, "target": 8},
            {"id": 13, "spell_id": 7, "parent_id": -1, "effect_kind": 15, "param": -1,
             "disposition": 2, "target": 8}
        ]"#,
    )
    .unwrap();

    let forest = EffectForest::from_rows(rows).unwrap();
    let text = generate_description(&forest, &NoNames).await;
    assert_eq!(
        text,
        format!(
            "Variable:\n\
             1 {PIP}: 90 {ICE}{DAMAGE} {ENEMY_SINGLE}\n\
             2 {PIP}: 180 {ICE}{DAMAGE} {ENEMY_SINGLE}\n\
             \n\
             Remove all {WEAKNESS} {ENEMY_SINGLE}\n"
        )
    );
}

/// Unknown kinds in rows are skipped instead of failing the spell.
#[tokio::test]
async fn test_unknown_kind_row_is_skipped() {
    init_tracing();
    let rows = vec![
        EffectRow { id: 1, parent_id: -1, effect_kind: 9000, param: 5, ..EffectRow::default() },
        EffectRow { id: 2, parent_id: -1, effect_kind: 3, param: 5, ..EffectRow::default() },
    ];
    let forest = EffectForest::from_rows(rows).unwrap();
    assert_eq!(generate_description(&forest, &NoNames).await, format!("5 {HEART}\n"));
}

/// Malformed class, disposition and duplicate-id rows stay local to their line.
#[tokio::test]
async fn test_malformed_rows_do_not_sink_the_spell() {
    init_tracing();
    let rows = vec![
        EffectRow { id: 1, parent_id: -1, effect_kind: 3, param: 40, ..EffectRow::default() },
        EffectRow {
            id: 2,
            parent_id: -1,
            effect_kind: 3,
            param: 20,
            disposition: 3,
            ..EffectRow::default()
        },
        EffectRow { id: 3, parent_id: -1, node_class: 7, ..EffectRow::default() },
        EffectRow { id: 4, parent_id: 3, effect_kind: 3, param: 10, ..EffectRow::default() },
        EffectRow { id: 1, parent_id: -1, effect_kind: 3, param: 99, ..EffectRow::default() },
    ];

    let forest = EffectForest::from_rows(rows).unwrap();
    assert_eq!(forest.len(), 4);
    assert_eq!(forest.get(id(3)).unwrap().class, NodeClass::Plain);

    let text = generate_description(&forest, &NoNames).await;
    assert_eq!(text, format!("40 {HEART}\n20 {HEART}\n10 {HEART}\n"));
}

/// Dangling parents are kept out of the output; the rest still renders.
#[tokio::test]
async fn test_dangling_parent_is_unreachable() {
    init_tracing();
    let forest = forest(vec![
        EffectNode::new(id(1), EffectId::ROOT, EffectKind::Heal).with_param(40),
        EffectNode::new(id(2), id(77), EffectKind::Damage).with_param(999),
    ]);

    assert_eq!(forest.unreachable(), vec![id(2)]);
    assert_eq!(generate_description(&forest, &NoNames).await, format!("40 {HEART}\n"));
}

/// Subtrees below the configured depth are dropped.
#[tokio::test]
async fn test_depth_limit_truncates() {
    init_tracing();
    let forest = forest(vec![
        EffectNode::new(id(1), EffectId::ROOT, EffectKind::Heal).with_param(1),
        EffectNode::new(id(2), id(1), EffectKind::Heal).with_param(2),
        EffectNode::new(id(3), id(2), EffectKind::Heal).with_param(3),
    ]);

    let describer = Describer::new(NoNames).with_config(DescribeConfig::new().with_max_depth(2));
    let text = describer.describe(&forest).await;
    assert_eq!(text, format!("1 {HEART}\n2 {HEART}\n"));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_forest() -> impl Strategy<Value = Vec<EffectNode>> {
    prop::collection::vec((0..152i32, -5..500i64, 0..4i32, 0..18i32, 0..7i32), 1..24).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (kind, param, rounds, target, class))| {
                    let i = i as i64;
                    // Parents always point at an earlier row (or the root).
                    let parent = if i == 0 { EffectId::ROOT } else { id((param.rem_euclid(i)) - 1) };
                    EffectNode::new(id(i), parent, EffectKind::from_raw(kind).unwrap())
                        .with_param(param)
                        .with_rounds(rounds)
                        .with_target(EffectTarget::from_raw(target).unwrap())
                        .with_class(NodeClass::from_raw(class).unwrap())
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_generation_is_deterministic(nodes in arb_forest()) {
        let forest = EffectForest::from_nodes(nodes);
        let first = futures::executor::block_on(generate_description(&forest, &NoNames));
        let second = futures::executor::block_on(generate_description(&forest, &NoNames));
        prop_assert_eq!(first, second);
    }
}
