//! Spell description templates.
//!
//! Card text is stored as a template with `$name$` variables that point at
//! the spell's effect rows, e.g. `Deals $eA$ $dT_image$ damage`. Rendering
//! strips markup the card renderer would interpret, then substitutes each
//! variable from the effects (sorted by id).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::EffectId;
use crate::effects::{EffectForest, EffectNode, School};
use crate::glyphs::icon_glyph;

static MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#-?\d+:").expect("valid pattern"));
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid pattern"));
static BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("valid pattern"));
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+?)(\d*)\$").expect("valid pattern"));

/// The slice of an effect row a template can reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEffect {
    pub id: EffectId,
    pub param: i64,
    pub school: School,
    pub rounds: i32,
}

impl From<&EffectNode> for TemplateEffect {
    fn from(node: &EffectNode) -> Self {
        Self { id: node.id, param: node.param, school: node.school, rounds: node.rounds }
    }
}

/// Template effects of a forest, ordered by effect id.
#[must_use]
pub fn template_effects(forest: &EffectForest) -> Vec<TemplateEffect> {
    let mut effects: Vec<TemplateEffect> = forest.iter().map(TemplateEffect::from).collect();
    effects.sort_by_key(|effect| effect.id);
    effects
}

/// Render a description template against a spell's effects.
///
/// Effects are sorted by id first. With no effects, every index refers to
/// a single zeroed effect. Indices are 1-based; index 0 wraps around to the
/// last effect.
///
/// ```
/// use spellscribe::spells::{render_template, TemplateEffect};
///
/// let effects = [TemplateEffect { param: 340, ..TemplateEffect::default() }];
/// assert_eq!(render_template("Deals $eA$ damage", &effects), "Deals 340 damage");
/// ```
#[must_use]
pub fn render_template(template: &str, effects: &[TemplateEffect]) -> String {
    let mut effects = effects.to_vec();
    if effects.is_empty() {
        effects.push(TemplateEffect::default());
    }
    effects.sort_by_key(|effect| effect.id);

    let text = MARKER.replace_all(template, "");
    let text = MARKUP.replace_all(&text, "");
    let mut text = BLOCK.replace_all(&text, "").into_owned();

    let variables: Vec<(String, String)> = VARIABLE
        .captures_iter(&text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();

    for (name, index) in variables {
        let token = format!("${name}{index}$");
        let slot = match index.parse::<usize>() {
            Ok(0) => effects.len().checked_sub(1),
            Ok(n) => Some(n - 1),
            Err(_) => Some(0),
        };
        let effect = slot.and_then(|slot| effects.get(slot));

        text = match name.as_str() {
            "eA" | "eAPerPip" | "eAPerPipAll" => {
                let value = match effect {
                    Some(effect) if !(name == "eA" && index == "1") => effect.param.to_string(),
                    _ => String::new(),
                };
                text.replace(&token, &value)
            }
            "eABonus" => text.replace(&token, "").trim_start().to_string(),
            "eAExtra" => text.replace(&format!("\\n+{token}"), "").replace(&token, ""),
            "eARounds" => {
                let value = effect.map(|effect| effect.rounds.to_string()).unwrap_or_default();
                text.replace(&token, &value)
            }
            "dT_image" => {
                let value = effect.map(|effect| effect.school.glyph()).unwrap_or_default();
                text.replace(&token, value)
            }
            icon => text.replace(&token, icon_glyph(icon)),
        };
    }

    text.replace("\\n", "\n").replace("\\r", "\r")
}
