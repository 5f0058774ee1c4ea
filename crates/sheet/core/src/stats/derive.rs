//! Derived-data computation.
//!
//! [`DerivedStats::compute`] is the single entry point: a pure, total
//! function from an [`ActorSnapshot`] to the fields the host merges back
//! into its actor record. Same snapshot in, same result out - no I/O, no
//! randomness, no shared state across calls.

use super::attributes::Attributes;
use super::encumbrance::Encumbrance;
use super::perks::PerkModifiers;
use super::skills::{SkillKind, SkillSet};
use crate::state::{ActorKind, ActorSnapshot, ItemKind};

/// Weight of sheet-assigned skill increases in the computed total.
///
/// Increases are recorded on the sheet but do not currently feed the
/// total. The weight is kept explicit so the term stays visible in the
/// computation instead of silently disappearing from it.
pub const INCREASES_WEIGHT: i32 = 0;

/// Dense computed skill values, indexed by [`SkillKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillValues {
    values: [i32; SkillKind::COUNT],
}

impl SkillValues {
    /// Evaluate every skill formula against an attribute block.
    ///
    /// Each value is `formula(attributes) + INCREASES_WEIGHT * increases +
    /// perk modifier`.
    pub fn compute(
        attributes: &Attributes,
        skills: &SkillSet,
        modifiers: &PerkModifiers,
    ) -> Self {
        let mut values = [0; SkillKind::COUNT];
        for kind in SkillKind::all() {
            values[kind.as_index()] = kind.formula().evaluate(attributes)
                + INCREASES_WEIGHT * skills.get(kind).increases
                + modifiers.flat(kind);
        }
        Self { values }
    }

    /// Computed value for a skill.
    #[inline]
    pub const fn get(&self, kind: SkillKind) -> i32 {
        self.values[kind.as_index()]
    }

    /// Iterate over all values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, i32)> + '_ {
        SkillKind::all()
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
    }
}

/// Output of a derived-data computation.
///
/// Which variant is produced depends only on the snapshot's actor kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivedStats {
    /// Player character: all skill values plus encumbrance.
    Pc {
        skills: SkillValues,
        encumbrance: Encumbrance,
    },
    /// Non-player character: experience value from challenge rating.
    /// Skills are not computed for NPCs.
    Npc { xp: i32 },
    /// No derived fields change for this actor kind.
    Unchanged,
}

impl DerivedStats {
    /// Compute derived data for one actor snapshot.
    pub fn compute(snapshot: &ActorSnapshot) -> Self {
        match snapshot.kind {
            ActorKind::Pc => Self::compute_pc(snapshot),
            ActorKind::Npc => DerivedStats::Npc {
                xp: snapshot.challenge * snapshot.challenge * 100,
            },
            ActorKind::Character => DerivedStats::Unchanged,
        }
    }

    fn compute_pc(snapshot: &ActorSnapshot) -> Self {
        let perks = snapshot
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Perk);
        let modifiers = PerkModifiers::collect(perks);

        DerivedStats::Pc {
            skills: SkillValues::compute(&snapshot.attributes, &snapshot.skills, &modifiers),
            encumbrance: Encumbrance::compute(&snapshot.attributes, &snapshot.items),
        }
    }
}
