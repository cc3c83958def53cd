use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equipment slot an item occupies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EquipSlot {
    MainHand,
    OffHand,
    Head,
    Body,
    Gloves,
    Waist,
    Legs,
    Feet,
    Ears,
    Neck,
    Wrists,
    FingerR,
    FingerL,
    SoulCrystal,
}

/// Slots that carry glamour, ordered to lay out in two columns.
pub const SUPPORTED_EQUIP_SLOTS: [EquipSlot; 12] = [
    EquipSlot::MainHand,
    EquipSlot::OffHand,
    EquipSlot::Head,
    EquipSlot::Ears,
    EquipSlot::Body,
    EquipSlot::Neck,
    EquipSlot::Gloves,
    EquipSlot::Wrists,
    EquipSlot::Legs,
    EquipSlot::FingerR,
    EquipSlot::Feet,
    EquipSlot::FingerL,
];

impl EquipSlot {
    pub fn is_supported(self) -> bool {
        SUPPORTED_EQUIP_SLOTS.contains(&self)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MainHand => "Main Hand",
            Self::OffHand => "Off Hand",
            Self::Head => "Head",
            Self::Body => "Body",
            Self::Gloves => "Hands",
            Self::Waist => "Waist",
            Self::Legs => "Legs",
            Self::Feet => "Feet",
            Self::Ears => "Earrings",
            Self::Neck => "Necklace",
            Self::Wrists => "Bracelets",
            Self::FingerR => "Right Ring",
            Self::FingerL => "Left Ring",
            Self::SoulCrystal => "Soul Crystal",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
