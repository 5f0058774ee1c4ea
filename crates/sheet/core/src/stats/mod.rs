//! Stat system for the character sheet.
//!
//! # Architecture
//!
//! ```text
//! [ Attributes (stored) ]
//!      ↓
//! [ Skill formulas + perk modifiers ]
//!      ↓
//! [ DerivedStats (computed) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: attributes, skill increases, and the item list are the only
//!    stored inputs
//! 2. **Derived values are never truth**: skill values, encumbrance, and NPC
//!    experience are recomputed from the snapshot on every preparation pass
//! 3. **Deterministic**: pure integer arithmetic, no I/O or randomness

pub mod attributes;
pub mod derive;
pub mod encumbrance;
pub mod perks;
pub mod skills;

// Re-export primary types
pub use attributes::{AttributeKind, Attributes};
pub use derive::{DerivedStats, INCREASES_WEIGHT, SkillValues};
pub use encumbrance::Encumbrance;
pub use perks::PerkModifiers;
pub use skills::{SkillCategory, SkillFormula, SkillKind, SkillSet, SkillState};
