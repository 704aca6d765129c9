//! Row identifiers.
//!
//! Effect rows link to each other through `EffectId`s. Root rows point at
//! the sentinel `EffectId::ROOT` instead of a real parent.

use serde::{Deserialize, Serialize};

/// Identifier of one effect row within a spell's effect set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectId(pub i64);

impl EffectId {
    /// Parent id carried by root rows ("no parent").
    pub const ROOT: EffectId = EffectId(-1);

    /// Create a new effect ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Is this the root sentinel?
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Identifier of the spell that owns a set of effect rows.
///
/// Only used to scope fetches; the tree logic never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellId(pub i64);

impl SpellId {
    /// Create a new spell ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spell({})", self.0)
    }
}
