//! Deterministic derived-data rules for a post-apocalyptic tabletop
//! character sheet.
//!
//! `sheet-core` defines the canonical data model (attributes, skills,
//! items, actor snapshots) and exposes the pure calculator that host
//! adapters call whenever an actor record needs its derived fields
//! refreshed. All computation flows through
//! [`stats::DerivedStats::compute`]; adapter crates depend on the types
//! re-exported here.
pub mod state;
pub mod stats;
pub use state::{ActorKind, ActorSnapshot, CarriedItem, ItemKind};
pub use stats::{
    AttributeKind, Attributes, DerivedStats, Encumbrance, INCREASES_WEIGHT, PerkModifiers,
    SkillCategory, SkillFormula, SkillKind, SkillSet, SkillState, SkillValues,
};
