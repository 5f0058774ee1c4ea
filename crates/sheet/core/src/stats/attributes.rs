//! Primary attributes - the stored inputs of the stat system.
//!
//! Attributes are the Single Source of Truth: every skill value, the
//! encumbrance maximum, and the roll-context entries are derived from them.
//! The calculator never writes an attribute.

/// The seven primary attributes that define a character.
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
#[strum(ascii_case_insensitive)]
pub enum AttributeKind {
    Strength,
    Endurance,
    Agility,
    Perception,
    Intelligence,
    Charisma,
    Luck,
}

impl AttributeKind {
    /// Total number of attributes.
    pub const COUNT: usize = 7;

    /// Returns all attribute kinds in declaration order.
    pub const fn all() -> [AttributeKind; Self::COUNT] {
        [
            AttributeKind::Strength,
            AttributeKind::Endurance,
            AttributeKind::Agility,
            AttributeKind::Perception,
            AttributeKind::Intelligence,
            AttributeKind::Charisma,
            AttributeKind::Luck,
        ]
    }
}

/// Dense attribute block for one actor.
///
/// Every field is always present; a record with a missing attribute is
/// rejected before a snapshot is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: i32,
    pub endurance: i32,
    pub agility: i32,
    pub perception: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub luck: i32,
}

impl Attributes {
    /// Create an attribute block with specified values.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        strength: i32,
        endurance: i32,
        agility: i32,
        perception: i32,
        intelligence: i32,
        charisma: i32,
        luck: i32,
    ) -> Self {
        Self {
            strength,
            endurance,
            agility,
            perception,
            intelligence,
            charisma,
            luck,
        }
    }

    /// Create an attribute block with every attribute at the same value.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value, value, value, value)
    }

    /// Look up a single attribute by kind.
    pub const fn get(&self, kind: AttributeKind) -> i32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Endurance => self.endurance,
            AttributeKind::Agility => self.agility,
            AttributeKind::Perception => self.perception,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Charisma => self.charisma,
            AttributeKind::Luck => self.luck,
        }
    }

    /// Set a single attribute by kind.
    pub fn set(&mut self, kind: AttributeKind, value: i32) {
        match kind {
            AttributeKind::Strength => self.strength = value,
            AttributeKind::Endurance => self.endurance = value,
            AttributeKind::Agility => self.agility = value,
            AttributeKind::Perception => self.perception = value,
            AttributeKind::Intelligence => self.intelligence = value,
            AttributeKind::Charisma => self.charisma = value,
            AttributeKind::Luck => self.luck = value,
        }
    }
}
