//! Carried-weight accounting.

use super::attributes::Attributes;
use crate::state::CarriedItem;

/// Carry capacity versus current load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encumbrance {
    /// Maximum load the actor can carry.
    pub max: i32,
    /// Current load summed over carried gear.
    pub value: i32,
}

impl Encumbrance {
    pub const fn new(max: i32, value: i32) -> Self {
        Self { max, value }
    }

    /// Compute both fields from the attribute block and the item list.
    ///
    /// Capacity is `Strength + Endurance`; load is the sum of gear
    /// contributions (perks and items without an encumbrance entry
    /// contribute 0).
    pub fn compute(attributes: &Attributes, items: &[CarriedItem]) -> Self {
        Self {
            max: attributes.strength + attributes.endurance,
            value: items.iter().map(CarriedItem::load).sum(),
        }
    }

    /// Whether current load exceeds capacity.
    pub const fn is_overloaded(&self) -> bool {
        self.value > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CarriedItem, ItemKind};

    #[test]
    fn capacity_is_strength_plus_endurance() {
        let attributes = Attributes::new(6, 4, 0, 0, 0, 0, 0);
        let encumbrance = Encumbrance::compute(&attributes, &[]);
        assert_eq!(encumbrance.max, 10);
        assert_eq!(encumbrance.value, 0);
    }

    #[test]
    fn load_sums_gear_and_skips_perks_and_missing_entries() {
        let attributes = Attributes::uniform(1);
        let items = [
            CarriedItem::gear(3),
            CarriedItem::gear(4),
            CarriedItem::new(ItemKind::Gear, None),
            CarriedItem::new(ItemKind::Perk, Some(99)),
        ];
        let encumbrance = Encumbrance::compute(&attributes, &items);
        assert_eq!(encumbrance.value, 7);
        assert!(encumbrance.is_overloaded());
    }
}
