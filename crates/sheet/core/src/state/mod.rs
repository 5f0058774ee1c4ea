//! Actor state types consumed by the calculator.
//!
//! A [`ActorSnapshot`] is built fresh by the host adapter every time derived
//! data is requested. The calculator never mutates a snapshot; it only reads
//! from it and returns a new [`crate::stats::DerivedStats`].

use crate::stats::{Attributes, SkillSet};

/// Actor classification, normalized from the host's type tags.
///
/// The host data uses several casings for the same concept (`"pc"` and
/// `"PC"` both mark a player character), so parsing is case-insensitive.
/// Tags outside this set never construct a snapshot: the host adapter
/// leaves such records untouched.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActorKind {
    /// Player character - skills and encumbrance are derived.
    Pc,
    /// Non-player character - experience value is derived from challenge.
    Npc,
    /// Character document used for roll-context flattening only; no
    /// derived fields are written.
    Character,
}

/// Classification of a carried item for derived-data purposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Ordinary equipment; contributes its encumbrance to the carried load.
    #[default]
    Gear,
    /// Perk; excluded from encumbrance and collected for skill modifiers.
    Perk,
}

impl ItemKind {
    /// Normalize a host item type tag.
    ///
    /// Only `"perk"` (any casing) is distinguished; every other tag is
    /// treated as gear.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("perk") {
            ItemKind::Perk
        } else {
            ItemKind::Gear
        }
    }
}

/// A single item owned by an actor.
///
/// Items without an encumbrance entry contribute 0 to the carried load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarriedItem {
    pub kind: ItemKind,
    pub encumbrance: Option<i32>,
}

impl CarriedItem {
    pub fn new(kind: ItemKind, encumbrance: Option<i32>) -> Self {
        Self { kind, encumbrance }
    }

    /// Convenience constructor for gear with a known encumbrance.
    pub fn gear(encumbrance: i32) -> Self {
        Self::new(ItemKind::Gear, Some(encumbrance))
    }

    /// Convenience constructor for a perk item.
    pub fn perk() -> Self {
        Self::new(ItemKind::Perk, None)
    }

    /// Contribution of this item to the carried load.
    pub fn load(&self) -> i32 {
        match self.kind {
            ItemKind::Gear => self.encumbrance.unwrap_or(0),
            ItemKind::Perk => 0,
        }
    }
}

/// Aggregate input state for one actor.
///
/// The snapshot always carries all seven attributes; records missing
/// attribute data are rejected at the parsing boundary and never reach the
/// calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    pub kind: ActorKind,
    pub attributes: Attributes,
    pub skills: SkillSet,
    pub items: Vec<CarriedItem>,
    /// Challenge rating; read only for NPC experience derivation.
    pub challenge: i32,
}

impl ActorSnapshot {
    pub fn new(kind: ActorKind, attributes: Attributes) -> Self {
        Self {
            kind,
            attributes,
            skills: SkillSet::default(),
            items: Vec::new(),
            challenge: 0,
        }
    }

    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_items(mut self, items: Vec<CarriedItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_challenge(mut self, challenge: i32) -> Self {
        self.challenge = challenge;
        self
    }
}
