//! Error types.

use super::EffectId;

/// Errors raised while turning raw effect rows into typed nodes.
///
/// Targets and schools are closed enumerations with a glyph per value; a
/// value outside them means the data source and this crate disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    /// Target discriminator outside the known set
    #[error("unknown effect target {value} on {id}")]
    UnknownTarget { id: EffectId, value: i32 },

    /// School index outside the known set
    #[error("unknown school {value} on {id}")]
    UnknownSchool { id: EffectId, value: i32 },
}

/// Result type alias for effect ingestion.
pub type Result<T> = std::result::Result<T, EffectError>;

/// What kind of record a name lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Spell template id.
    Spell,
    /// Creature (mob) template id.
    Mob,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKind::Spell => f.write_str("spell"),
            LookupKind::Mob => f.write_str("mob"),
        }
    }
}

/// Name lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No record with this id
    #[error("{what} {id} not found")]
    NotFound { what: LookupKind, id: i64 },

    /// The backing store failed
    #[error("lookup backend error: {0}")]
    Backend(String),
}
