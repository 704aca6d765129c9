//! Per-node line formatting.
//!
//! - `formatter`: one line per leaf, dispatched on `EffectKind`
//! - `modifiers`: the shared hanging/aura/global layout of stat modifiers

pub mod formatter;
pub mod modifiers;

pub use formatter::{format_leaf, name_lookup, render_line, LineFlags};
pub use modifiers::{modifier_phrase, protect, signed, ModifierGlyphs, Placement, Unit};
