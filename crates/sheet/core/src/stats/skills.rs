//! Skills - the derived competencies of the stat system.
//!
//! Each skill has exactly one linear formula over the primary attributes.
//! Skill values are never stored as truth; they are recomputed from the
//! attribute block every time derived data is prepared.

use super::attributes::Attributes;

/// Informal grouping used by the sheet layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SkillCategory {
    Combat,
    Education,
    Social,
    Survival,
    Technical,
}

/// The 30 skills tracked on a character sheet.
///
/// Display names match the host's skill keys ("Big Guns", "Rocket
/// Science", ...) and parse back case-insensitively.
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
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum SkillKind {
    // ========================================================================
    // Combat
    // ========================================================================
    BigGuns = 0,
    Bows = 1,
    Melee = 2,
    SmallGuns = 3,
    Throwing = 4,
    Unarmed = 5,

    // ========================================================================
    // Education
    // ========================================================================
    Computers = 6,
    Engineering = 7,
    RocketScience = 8,
    Substances = 9,
    Surgery = 10,

    // ========================================================================
    // Social
    // ========================================================================
    Charm = 11,
    Coercion = 12,
    Deception = 13,
    Negotiation = 14,

    // ========================================================================
    // Survival
    // ========================================================================
    Acrobatics = 15,
    Athletics = 16,
    Awareness = 17,
    Beasts = 18,
    Composure = 19,
    FirstAid = 20,
    Making = 21,
    Resilience = 22,
    Scrounging = 23,
    Stealth = 24,

    // ========================================================================
    // Technical
    // ========================================================================
    Driving = 25,
    Explosives = 26,
    Flying = 27,
    Mechanics = 28,
    Skullduggery = 29,
}

impl SkillKind {
    /// Total number of skills.
    pub const COUNT: usize = 30;

    /// Returns all skill kinds in order.
    pub const fn all() -> [SkillKind; Self::COUNT] {
        [
            SkillKind::BigGuns,
            SkillKind::Bows,
            SkillKind::Melee,
            SkillKind::SmallGuns,
            SkillKind::Throwing,
            SkillKind::Unarmed,
            SkillKind::Computers,
            SkillKind::Engineering,
            SkillKind::RocketScience,
            SkillKind::Substances,
            SkillKind::Surgery,
            SkillKind::Charm,
            SkillKind::Coercion,
            SkillKind::Deception,
            SkillKind::Negotiation,
            SkillKind::Acrobatics,
            SkillKind::Athletics,
            SkillKind::Awareness,
            SkillKind::Beasts,
            SkillKind::Composure,
            SkillKind::FirstAid,
            SkillKind::Making,
            SkillKind::Resilience,
            SkillKind::Scrounging,
            SkillKind::Stealth,
            SkillKind::Driving,
            SkillKind::Explosives,
            SkillKind::Flying,
            SkillKind::Mechanics,
            SkillKind::Skullduggery,
        ]
    }

    /// Returns the skill as an array index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Sheet grouping for this skill.
    pub const fn category(self) -> SkillCategory {
        match self {
            SkillKind::BigGuns
            | SkillKind::Bows
            | SkillKind::Melee
            | SkillKind::SmallGuns
            | SkillKind::Throwing
            | SkillKind::Unarmed => SkillCategory::Combat,

            SkillKind::Computers
            | SkillKind::Engineering
            | SkillKind::RocketScience
            | SkillKind::Substances
            | SkillKind::Surgery => SkillCategory::Education,

            SkillKind::Charm
            | SkillKind::Coercion
            | SkillKind::Deception
            | SkillKind::Negotiation => SkillCategory::Social,

            SkillKind::Acrobatics
            | SkillKind::Athletics
            | SkillKind::Awareness
            | SkillKind::Beasts
            | SkillKind::Composure
            | SkillKind::FirstAid
            | SkillKind::Making
            | SkillKind::Resilience
            | SkillKind::Scrounging
            | SkillKind::Stealth => SkillCategory::Survival,

            SkillKind::Driving
            | SkillKind::Explosives
            | SkillKind::Flying
            | SkillKind::Mechanics
            | SkillKind::Skullduggery => SkillCategory::Technical,
        }
    }

    /// The linear formula deriving this skill from the attribute block.
    pub const fn formula(self) -> SkillFormula {
        match self {
            SkillKind::BigGuns => SkillFormula::base(10).agility(10).perception(10),
            SkillKind::Bows => SkillFormula::base(0).strength(10).agility(10),
            SkillKind::Melee => SkillFormula::base(20).strength(10).agility(10),
            SkillKind::SmallGuns => SkillFormula::base(20).agility(10).perception(10),
            SkillKind::Throwing => SkillFormula::base(0).strength(10).agility(10),
            SkillKind::Unarmed => SkillFormula::base(0).strength(10).agility(10),

            SkillKind::Computers => SkillFormula::base(0).intelligence(15),
            SkillKind::Engineering => SkillFormula::base(0).intelligence(10),
            SkillKind::RocketScience => SkillFormula::base(0).intelligence(10),
            SkillKind::Substances => SkillFormula::base(0).intelligence(10),
            SkillKind::Surgery => SkillFormula::base(0).intelligence(10),

            SkillKind::Charm => SkillFormula::base(0).charisma(15),
            SkillKind::Coercion => SkillFormula::base(0).strength(5).charisma(10),
            SkillKind::Deception => SkillFormula::base(0).perception(5).charisma(10),
            SkillKind::Negotiation => SkillFormula::base(0).perception(10).charisma(5),

            SkillKind::Acrobatics => {
                SkillFormula::base(10).strength(5).endurance(5).agility(10)
            }
            SkillKind::Athletics => {
                SkillFormula::base(30).strength(10).endurance(5).agility(5)
            }
            SkillKind::Awareness => SkillFormula::base(20).perception(10).intelligence(10),
            SkillKind::Beasts => SkillFormula::base(10).charisma(10).intelligence(10),
            SkillKind::Composure => SkillFormula::base(0).charisma(10).intelligence(5),
            SkillKind::FirstAid => SkillFormula::base(0).perception(5).intelligence(10),
            SkillKind::Making => SkillFormula::base(0).strength(5).intelligence(10),
            SkillKind::Resilience => SkillFormula::base(0).endurance(15),
            SkillKind::Scrounging => SkillFormula::base(10).perception(15),
            SkillKind::Stealth => SkillFormula::base(0).perception(5).agility(10),

            SkillKind::Driving => SkillFormula::base(10).perception(10).agility(10),
            SkillKind::Explosives => SkillFormula::base(0).perception(10).intelligence(10),
            SkillKind::Flying => SkillFormula::base(0).perception(10).agility(5),
            SkillKind::Mechanics => SkillFormula::base(0).intelligence(10).agility(5),
            SkillKind::Skullduggery => SkillFormula::base(0).perception(5).agility(10),
        }
    }
}

/// A flat base plus one integer coefficient per non-Luck attribute.
///
/// Luck is not part of the coefficient table: every skill adds the Luck
/// value at weight 1 on top of its formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillFormula {
    pub flat: i32,
    pub strength: i32,
    pub endurance: i32,
    pub agility: i32,
    pub perception: i32,
    pub intelligence: i32,
    pub charisma: i32,
}

impl SkillFormula {
    /// Start a formula from its flat base.
    pub const fn base(flat: i32) -> Self {
        Self {
            flat,
            strength: 0,
            endurance: 0,
            agility: 0,
            perception: 0,
            intelligence: 0,
            charisma: 0,
        }
    }

    pub const fn strength(mut self, coefficient: i32) -> Self {
        self.strength = coefficient;
        self
    }

    pub const fn endurance(mut self, coefficient: i32) -> Self {
        self.endurance = coefficient;
        self
    }

    pub const fn agility(mut self, coefficient: i32) -> Self {
        self.agility = coefficient;
        self
    }

    pub const fn perception(mut self, coefficient: i32) -> Self {
        self.perception = coefficient;
        self
    }

    pub const fn intelligence(mut self, coefficient: i32) -> Self {
        self.intelligence = coefficient;
        self
    }

    pub const fn charisma(mut self, coefficient: i32) -> Self {
        self.charisma = coefficient;
        self
    }

    /// Evaluate the formula against an attribute block, including the
    /// universal `+ Luck` term.
    ///
    /// All terms are integer multiplications and additions; typical
    /// tabletop inputs keep results comfortably below 1000.
    pub const fn evaluate(&self, attributes: &Attributes) -> i32 {
        self.flat
            + self.strength * attributes.strength
            + self.endurance * attributes.endurance
            + self.agility * attributes.agility
            + self.perception * attributes.perception
            + self.intelligence * attributes.intelligence
            + self.charisma * attributes.charisma
            + attributes.luck
    }
}

/// Stored per-skill sheet state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillState {
    /// Last computed skill value; overwritten on every recompute.
    pub value: i32,
    /// Rank investment assigned on the sheet. Recorded but currently given
    /// zero weight in the computed total.
    pub increases: i32,
}

impl SkillState {
    pub const fn new(value: i32, increases: i32) -> Self {
        Self { value, increases }
    }
}

/// Dense per-skill state for one actor, indexed by [`SkillKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    entries: [SkillState; SkillKind::COUNT],
}

impl SkillSet {
    pub const fn new(entries: [SkillState; SkillKind::COUNT]) -> Self {
        Self { entries }
    }

    #[inline]
    pub const fn get(&self, kind: SkillKind) -> SkillState {
        self.entries[kind.as_index()]
    }

    #[inline]
    pub fn get_mut(&mut self, kind: SkillKind) -> &mut SkillState {
        &mut self.entries[kind.as_index()]
    }

    pub fn set(&mut self, kind: SkillKind, state: SkillState) {
        self.entries[kind.as_index()] = state;
    }

    /// Iterate over all skills in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, SkillState)> + '_ {
        SkillKind::all()
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_names_match_host_spelling() {
        assert_eq!(SkillKind::BigGuns.to_string(), "Big Guns");
        assert_eq!(SkillKind::RocketScience.to_string(), "Rocket Science");
        assert_eq!(SkillKind::FirstAid.to_string(), "First Aid");
        assert_eq!(SkillKind::Skullduggery.to_string(), "Skullduggery");
        for kind in SkillKind::all() {
            assert_eq!(kind.to_string().parse::<SkillKind>().unwrap(), kind);
        }
    }

    #[test]
    fn all_returns_each_skill_at_its_own_index() {
        let all = SkillKind::all();
        assert_eq!(all.len(), SkillKind::COUNT);
        for (index, kind) in all.into_iter().enumerate() {
            assert_eq!(kind.as_index(), index);
        }
    }

    #[test]
    fn category_sizes_match_sheet_layout() {
        let count = |category: SkillCategory| {
            SkillKind::all()
                .into_iter()
                .filter(|kind| kind.category() == category)
                .count()
        };
        assert_eq!(count(SkillCategory::Combat), 6);
        assert_eq!(count(SkillCategory::Education), 5);
        assert_eq!(count(SkillCategory::Social), 4);
        assert_eq!(count(SkillCategory::Survival), 10);
        assert_eq!(count(SkillCategory::Technical), 5);
    }

    #[test]
    fn every_formula_adds_luck_at_weight_one() {
        let without_luck = Attributes::default();
        let with_luck = Attributes {
            luck: 3,
            ..Attributes::default()
        };
        for kind in SkillKind::all() {
            let formula = kind.formula();
            assert_eq!(
                formula.evaluate(&with_luck),
                formula.evaluate(&without_luck) + 3,
                "{kind} should add Luck at weight 1"
            );
        }
    }

    #[test]
    fn formula_spot_checks() {
        // Strength=5, Agility=3, Perception=2, Luck=1
        let attributes = Attributes::new(5, 0, 3, 2, 0, 0, 1);
        assert_eq!(SkillKind::BigGuns.formula().evaluate(&attributes), 71);
        assert_eq!(SkillKind::Bows.formula().evaluate(&attributes), 81);
        assert_eq!(SkillKind::Melee.formula().evaluate(&attributes), 101);

        let scholar = Attributes::new(1, 1, 1, 1, 6, 2, 2);
        // Computers: 15 * INT + Luck = 90 + 2
        assert_eq!(SkillKind::Computers.formula().evaluate(&scholar), 92);
        // Awareness: 20 + 10 * PER + 10 * INT + Luck = 20 + 10 + 60 + 2
        assert_eq!(SkillKind::Awareness.formula().evaluate(&scholar), 92);
        // Resilience: 15 * END + Luck
        assert_eq!(SkillKind::Resilience.formula().evaluate(&scholar), 17);
        // Charm: 15 * CHA + Luck
        assert_eq!(SkillKind::Charm.formula().evaluate(&scholar), 32);
        // Mechanics: 10 * INT + 5 * AGI + Luck
        assert_eq!(SkillKind::Mechanics.formula().evaluate(&scholar), 67);
    }

    #[test]
    fn skill_set_indexing_round_trips() {
        let mut skills = SkillSet::default();
        skills.set(SkillKind::Stealth, SkillState::new(42, 2));
        skills.get_mut(SkillKind::Charm).increases = 5;

        assert_eq!(skills.get(SkillKind::Stealth), SkillState::new(42, 2));
        assert_eq!(skills.get(SkillKind::Charm).increases, 5);
        assert_eq!(skills.get(SkillKind::Bows), SkillState::default());
        assert_eq!(skills.iter().count(), SkillKind::COUNT);
    }
}
