//! Perk-sourced skill modifiers.
//!
//! Perk items are separated from gear before encumbrance accounting and
//! routed here. This is the extension point where perk effects land: the
//! collection plumbing runs on every recompute, but no perk currently
//! defines an effect table, so the collected modifiers are always empty.

use super::skills::SkillKind;
use crate::state::{CarriedItem, ItemKind};

/// Flat per-skill modifiers contributed by perks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkModifiers {
    flat: [i32; SkillKind::COUNT],
}

impl Default for PerkModifiers {
    fn default() -> Self {
        Self {
            flat: [0; SkillKind::COUNT],
        }
    }
}

impl PerkModifiers {
    /// Create an empty modifier set (no effects).
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect modifiers from an actor's perk items.
    ///
    /// TODO: read per-perk effect data here once perk items carry it.
    pub fn collect<'a, I>(perks: I) -> Self
    where
        I: IntoIterator<Item = &'a CarriedItem>,
    {
        let modifiers = Self::new();
        for perk in perks {
            debug_assert_eq!(perk.kind, ItemKind::Perk);
        }
        modifiers
    }

    /// Add a flat modifier to a skill.
    pub fn add_flat(&mut self, kind: SkillKind, value: i32) {
        self.flat[kind.as_index()] += value;
    }

    /// Flat modifier for a skill.
    #[inline]
    pub const fn flat(&self, kind: SkillKind) -> i32 {
        self.flat[kind.as_index()]
    }

    /// Whether any modifier is non-zero.
    pub fn is_empty(&self) -> bool {
        self.flat.iter().all(|value| *value == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_perks_contribute_nothing_yet() {
        let perks = [CarriedItem::perk(), CarriedItem::perk()];
        let modifiers = PerkModifiers::collect(&perks);
        assert!(modifiers.is_empty());
        for kind in SkillKind::all() {
            assert_eq!(modifiers.flat(kind), 0);
        }
    }

    #[test]
    fn flat_modifiers_accumulate_per_skill() {
        let mut modifiers = PerkModifiers::new();
        modifiers.add_flat(SkillKind::SmallGuns, 10);
        modifiers.add_flat(SkillKind::SmallGuns, 5);
        assert_eq!(modifiers.flat(SkillKind::SmallGuns), 15);
        assert_eq!(modifiers.flat(SkillKind::BigGuns), 0);
        assert!(!modifiers.is_empty());
    }
}
