use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of collectible categories.
///
/// Declaration order is display order; [`Category::order_key`] is the
/// variant's position in [`Category::ALL`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Glamour,
    Mount,
    Minion,
    Emote,
    Hairstyle,
    TripleTriad,
    BlueMage,
    Barding,
    OrchestrionRoll,
    Outfit,
    FramerKit,
    FashionAccessory,
    Glasses,
}

impl Category {
    pub const COUNT: usize = 13;

    pub const ALL: [Category; Self::COUNT] = [
        Self::Glamour,
        Self::Mount,
        Self::Minion,
        Self::Emote,
        Self::Hairstyle,
        Self::TripleTriad,
        Self::BlueMage,
        Self::Barding,
        Self::OrchestrionRoll,
        Self::Outfit,
        Self::FramerKit,
        Self::FashionAccessory,
        Self::Glasses,
    ];

    /// Fixed display-order key, `0..=12`.
    pub const fn order_key(self) -> u32 {
        self as u32
    }

    /// Collection name shown to users.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Glamour => "Glamour",
            Self::Mount => "Mounts",
            Self::Minion => "Minions",
            Self::Emote => "Emotes",
            Self::Hairstyle => "Hairstyles",
            Self::TripleTriad => "Triple Triad",
            Self::BlueMage => "Blue Mage",
            Self::Barding => "Bardings",
            Self::OrchestrionRoll => "Orchestrion Rolls",
            Self::Outfit => "Outfits",
            Self::FramerKit => "Framer's Kits",
            Self::FashionAccessory => "Fashion Accessories",
            Self::Glasses => "Glasses",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_keys_are_dense() {
        let keys: Vec<u32> = Category::ALL.iter().map(|c| c.order_key()).collect();
        assert_eq!(keys, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn display_names_are_unique_and_round_trip() {
        let names: HashSet<&str> = Category::ALL.iter().map(|c| c.display_name()).collect();
        assert_eq!(names.len(), Category::COUNT);
        for c in Category::ALL {
            assert_eq!(Category::from_display_name(c.display_name()), Some(c));
        }
        assert_eq!(Category::from_display_name("Fish"), None);
    }
}
