//! Spell card helpers around the effect description.
//!
//! - `template`: renders the stored description template (`$eA$` variables)
//! - `header`: pip cost, accuracy/energy and type glyph of a card

mod header;
mod template;

pub use header::{SchoolPips, SpellHeader, CANTRIP_TYPES, FISHING_TYPES, GARDENING_TYPES, SPELL_TYPES};
pub use template::{render_template, template_effects, TemplateEffect};
