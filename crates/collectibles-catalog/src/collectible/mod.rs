//! Collectible values.
//!
//! A [`Collectible`] is built from exactly one (adapted) sheet row and never
//! changes afterwards. Identity is `(category, row id)`.

mod variants;

pub use variants::*;

use collectibles_common::{Category, RowId};

/// Ties a collectible variant to its category.
pub trait CollectibleKind {
    const CATEGORY: Category;
}

/// Construction of a collectible variant from one row of type `R`.
///
/// Total over rows that passed the category's filter.
pub trait FromRow<R>: CollectibleKind + Into<Collectible> {
    fn from_row(row: &R) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collectible {
    Glamour(GlamourCollectible),
    Mount(MountCollectible),
    Minion(MinionCollectible),
    Emote(EmoteCollectible),
    Hairstyle(HairstyleCollectible),
    TripleTriad(TripleTriadCollectible),
    BlueMage(BlueMageCollectible),
    Barding(BardingCollectible),
    OrchestrionRoll(OrchestrionCollectible),
    Outfit(OutfitCollectible),
    FramerKit(FramerKitCollectible),
    FashionAccessory(FashionAccessoryCollectible),
    Glasses(GlassesCollectible),
}

macro_rules! dispatch {
    ($self:ident, $c:ident => $body:expr) => {
        match $self {
            Collectible::Glamour($c) => $body,
            Collectible::Mount($c) => $body,
            Collectible::Minion($c) => $body,
            Collectible::Emote($c) => $body,
            Collectible::Hairstyle($c) => $body,
            Collectible::TripleTriad($c) => $body,
            Collectible::BlueMage($c) => $body,
            Collectible::Barding($c) => $body,
            Collectible::OrchestrionRoll($c) => $body,
            Collectible::Outfit($c) => $body,
            Collectible::FramerKit($c) => $body,
            Collectible::FashionAccessory($c) => $body,
            Collectible::Glasses($c) => $body,
        }
    };
}

impl Collectible {
    pub fn category(&self) -> Category {
        match self {
            Self::Glamour(_) => Category::Glamour,
            Self::Mount(_) => Category::Mount,
            Self::Minion(_) => Category::Minion,
            Self::Emote(_) => Category::Emote,
            Self::Hairstyle(_) => Category::Hairstyle,
            Self::TripleTriad(_) => Category::TripleTriad,
            Self::BlueMage(_) => Category::BlueMage,
            Self::Barding(_) => Category::Barding,
            Self::OrchestrionRoll(_) => Category::OrchestrionRoll,
            Self::Outfit(_) => Category::Outfit,
            Self::FramerKit(_) => Category::FramerKit,
            Self::FashionAccessory(_) => Category::FashionAccessory,
            Self::Glasses(_) => Category::Glasses,
        }
    }

    /// Source row id within the category's sheet.
    pub fn row_id(&self) -> RowId {
        dispatch!(self, c => c.row_id)
    }

    pub fn name(&self) -> &str {
        dispatch!(self, c => c.name.as_str())
    }

    pub fn icon(&self) -> u32 {
        dispatch!(self, c => c.icon)
    }

    pub fn identity(&self) -> (Category, RowId) {
        (self.category(), self.row_id())
    }
}
