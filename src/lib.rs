//! # spellscribe
//!
//! Renders a spell's effect table into emoji-annotated description text.
//!
//! ## Design Principles
//!
//! 1. **Flat Rows In, Text Out**: Effects stay as rows linked by parent id.
//!    The forest is read-only; the only output is a `String`.
//!
//! 2. **Parent Class Decides Layout**: A node's class says how its
//!    *children* are headed and prefixed, never how the node itself renders.
//!
//! 3. **Never Fail a Description**: Unknown effect kinds render nothing,
//!    failed name lookups show the raw id, and over-deep subtrees are dropped.
//!
//! ## Architecture
//!
//! - **Closed Kind Dispatch**: `EffectKind` is a closed enum; one exhaustive
//!   match turns a node into its phrase.
//!
//! - **Shared Modifier Layout**: Outgoing/incoming stat modifiers share a
//!   hanging / aura / global placement rule parameterized by glyph sets.
//!
//! - **Async Names, Sequential Walk**: Names come from an injected
//!   `NameResolver`. The walker awaits lookups one at a time, so output
//!   order equals traversal order.
//!
//! ## Modules
//!
//! - `core`: ids, errors, configuration
//! - `glyphs`: static emoji tables
//! - `effects`: effect rows, typed nodes and the effect forest
//! - `names`: async name resolution
//! - `format`: per-node line formatting
//! - `describe`: tree walker, condition rewriting, post-processing
//! - `spells`: description templates and card header fields

pub mod core;
pub mod glyphs;
pub mod effects;
pub mod names;
pub mod format;
pub mod describe;
pub mod spells;

// Re-export commonly used types
pub use crate::core::{DescribeConfig, EffectError, EffectId, LookupError, LookupKind, SpellId};

pub use crate::effects::{
    Disposition, EffectForest, EffectKind, EffectNode, EffectRow, EffectTarget, NodeClass, School,
};

pub use crate::names::{NameResolver, NameTable, NoNames};

pub use crate::format::{format_leaf, render_line, LineFlags};

pub use crate::describe::{generate_description, Describer};

pub use crate::spells::{render_template, SpellHeader, TemplateEffect};
