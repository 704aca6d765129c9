//! Effect table model.
//!
//! A spell's effects arrive as flat rows linked by parent id:
//! - `EffectRow`: a row exactly as stored (plain integers)
//! - `EffectNode`: the typed row (`NodeClass`, `EffectKind`, `EffectTarget`, `School`)
//! - `EffectForest`: all rows of one spell, indexed by parent
//!
//! ## Node class vs. effect kind
//!
//! `NodeClass` is structural (random choice, X-pip variants, conditions);
//! `EffectKind` is the leaf action (damage, heal, ward...). A wrapper node
//! has `EffectKind::Invalid` and only contributes its children.

mod kind;
mod node;
mod target;
mod school;
mod forest;

pub use kind::EffectKind;
pub use node::{Disposition, EffectNode, EffectRow, NodeClass};
pub use target::EffectTarget;
pub use school::{equip_school, School, PRIMARY_SCHOOLS};
pub use forest::EffectForest;
