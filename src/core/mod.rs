//! Core types: identifiers, errors, configuration.
//!
//! Everything else in the crate builds on these; nothing here knows about
//! effect kinds or glyphs.

pub mod ids;
pub mod error;
pub mod config;

pub use ids::{EffectId, SpellId};
pub use error::{EffectError, LookupError, LookupKind, Result};
pub use config::{DescribeConfig, DEFAULT_CONDENSE_THRESHOLD, DEFAULT_MAX_DEPTH};
