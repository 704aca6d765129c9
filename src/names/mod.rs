//! Name resolution for effects that reference other records.
//!
//! Spell-adding, mutation, summon, polymorph and kill effects carry a
//! template id in `param`. Turning that id into a display name is the
//! caller's job (usually a database query), so the walker takes a
//! `NameResolver` and awaits it once per such line, in traversal order.
//!
//! `NameTable` is an in-memory resolver for callers that preload names.

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::core::{LookupError, LookupKind};

/// Resolves template ids to display names.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Name of the spell with this template id.
    async fn spell_name(&self, template_id: i64) -> Result<String, LookupError>;

    /// Name of the creature with this template id.
    async fn mob_name(&self, mob_id: i64) -> Result<String, LookupError>;
}

#[async_trait]
impl<T: NameResolver + ?Sized> NameResolver for &T {
    async fn spell_name(&self, template_id: i64) -> Result<String, LookupError> {
        (**self).spell_name(template_id).await
    }

    async fn mob_name(&self, mob_id: i64) -> Result<String, LookupError> {
        (**self).mob_name(mob_id).await
    }
}

/// A resolver that knows no names. Every lookup is `NotFound`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNames;

#[async_trait]
impl NameResolver for NoNames {
    async fn spell_name(&self, template_id: i64) -> Result<String, LookupError> {
        Err(LookupError::NotFound { what: LookupKind::Spell, id: template_id })
    }

    async fn mob_name(&self, mob_id: i64) -> Result<String, LookupError> {
        Err(LookupError::NotFound { what: LookupKind::Mob, id: mob_id })
    }
}

/// Preloaded spell and creature names.
///
/// ## Example
///
/// ```
/// use spellscribe::names::NameTable;
///
/// let mut names = NameTable::new();
/// names.insert_spell(1001, "Meteor");
/// names.insert_mob(77, "Fire Elf");
///
/// assert_eq!(names.spell(1001), Some("Meteor"));
/// assert_eq!(names.mob(5), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    spells: FxHashMap<i64, String>,
    mobs: FxHashMap<i64, String>,
}

impl NameTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spell name, replacing any previous one.
    pub fn insert_spell(&mut self, template_id: i64, name: impl Into<String>) {
        self.spells.insert(template_id, name.into());
    }

    /// Register a creature name, replacing any previous one.
    pub fn insert_mob(&mut self, mob_id: i64, name: impl Into<String>) {
        self.mobs.insert(mob_id, name.into());
    }

    /// Builder form of `insert_spell`.
    #[must_use]
    pub fn with_spell(mut self, template_id: i64, name: impl Into<String>) -> Self {
        self.insert_spell(template_id, name);
        self
    }

    /// Builder form of `insert_mob`.
    #[must_use]
    pub fn with_mob(mut self, mob_id: i64, name: impl Into<String>) -> Self {
        self.insert_mob(mob_id, name);
        self
    }

    /// Look up a spell name.
    #[must_use]
    pub fn spell(&self, template_id: i64) -> Option<&str> {
        self.spells.get(&template_id).map(String::as_str)
    }

    /// Look up a creature name.
    #[must_use]
    pub fn mob(&self, mob_id: i64) -> Option<&str> {
        self.mobs.get(&mob_id).map(String::as_str)
    }

    /// Total number of names held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len() + self.mobs.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty() && self.mobs.is_empty()
    }
}

#[async_trait]
impl NameResolver for NameTable {
    async fn spell_name(&self, template_id: i64) -> Result<String, LookupError> {
        self.spell(template_id)
            .map(str::to_owned)
            .ok_or(LookupError::NotFound { what: LookupKind::Spell, id: template_id })
    }

    async fn mob_name(&self, mob_id: i64) -> Result<String, LookupError> {
        self.mob(mob_id)
            .map(str::to_owned)
            .ok_or(LookupError::NotFound { what: LookupKind::Mob, id: mob_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_table_lookups() {
        let names = NameTable::new().with_spell(10, "Fire Cat").with_mob(20, "Troll");

        assert_eq!(block_on(names.spell_name(10)).unwrap(), "Fire Cat");
        assert_eq!(block_on(names.mob_name(20)).unwrap(), "Troll");
        assert_eq!(
            block_on(names.mob_name(10)),
            Err(LookupError::NotFound { what: LookupKind::Mob, id: 10 })
        );
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_borrowed_resolver() {
        let names = NameTable::new().with_spell(3, "Tempest");
        let borrowed: &dyn NameResolver = &names;
        assert_eq!(block_on((&borrowed).spell_name(3)).unwrap(), "Tempest");
    }

    #[test]
    fn test_no_names() {
        assert!(block_on(NoNames.spell_name(1)).is_err());
        assert!(block_on(NoNames.mob_name(1)).is_err());
    }
}
