use collectibles_common::{
    ActionRow, BuddyEquipRow, Category, CompanionRow, EmoteRow, EquipSlot, GlassesRow, MountRow,
    OrchestrionRow, OrnamentRow, RowId, TripleTriadCardRow,
};

use super::{Collectible, CollectibleKind, FromRow};
use crate::adapters::{CharaMakeCustomizeAdapter, ItemAdapter};

macro_rules! collectible_kind {
    ($($ty:ident => $variant:ident),+ $(,)?) => {
        $(
            impl CollectibleKind for $ty {
                const CATEGORY: Category = Category::$variant;
            }

            impl From<$ty> for Collectible {
                fn from(value: $ty) -> Self {
                    Collectible::$variant(value)
                }
            }
        )+
    };
}

collectible_kind! {
    GlamourCollectible => Glamour,
    MountCollectible => Mount,
    MinionCollectible => Minion,
    EmoteCollectible => Emote,
    HairstyleCollectible => Hairstyle,
    TripleTriadCollectible => TripleTriad,
    BlueMageCollectible => BlueMage,
    BardingCollectible => Barding,
    OrchestrionCollectible => OrchestrionRoll,
    OutfitCollectible => Outfit,
    FramerKitCollectible => FramerKit,
    FashionAccessoryCollectible => FashionAccessory,
    GlassesCollectible => Glasses,
}

/* ───────────────────────── item-backed ───────────────────────── */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlamourCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub equip_slot: Option<EquipSlot>,
    pub level_equip: u8,
    pub dye_count: u8,
}

impl FromRow<ItemAdapter> for GlamourCollectible {
    fn from_row(row: &ItemAdapter) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.clone(),
            icon: row.icon,
            equip_slot: row.equip_slot,
            level_equip: row.level_equip,
            dye_count: row.dye_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub level_equip: u8,
}

impl FromRow<ItemAdapter> for OutfitCollectible {
    fn from_row(row: &ItemAdapter) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.clone(),
            icon: row.icon,
            level_equip: row.level_equip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramerKitCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
}

impl FromRow<ItemAdapter> for FramerKitCollectible {
    fn from_row(row: &ItemAdapter) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.clone(),
            icon: row.icon,
        }
    }
}

/* ────────────────────────── companions ────────────────────────── */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub order: i16,
}

impl FromRow<MountRow> for MountCollectible {
    fn from_row(row: &MountRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.singular.extract_text(),
            icon: u32::from(row.icon),
            order: row.order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinionCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
}

impl FromRow<CompanionRow> for MinionCollectible {
    fn from_row(row: &CompanionRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.singular.extract_text(),
            icon: u32::from(row.icon),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BardingCollectible {
    pub row_id: RowId,
    pub name: String,
    /// Head piece icon, which is what the barding list shows.
    pub icon: u32,
    pub icon_body: u32,
    pub icon_legs: u32,
}

impl FromRow<BuddyEquipRow> for BardingCollectible {
    fn from_row(row: &BuddyEquipRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: u32::from(row.icon_head),
            icon_body: u32::from(row.icon_body),
            icon_legs: u32::from(row.icon_legs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FashionAccessoryCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
}

impl FromRow<OrnamentRow> for FashionAccessoryCollectible {
    fn from_row(row: &OrnamentRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.singular.extract_text(),
            icon: u32::from(row.icon),
        }
    }
}

/* ─────────────────────────── the rest ─────────────────────────── */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoteCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub unlock_link: u32,
}

impl FromRow<EmoteRow> for EmoteCollectible {
    fn from_row(row: &EmoteRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: u32::from(row.icon),
            unlock_link: row.unlock_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HairstyleCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub feature_id: u8,
}

impl FromRow<CharaMakeCustomizeAdapter> for HairstyleCollectible {
    fn from_row(row: &CharaMakeCustomizeAdapter) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.clone(),
            icon: row.icon,
            feature_id: row.feature_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleTriadCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub description: String,
}

impl FromRow<TripleTriadCardRow> for TripleTriadCollectible {
    fn from_row(row: &TripleTriadCardRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: row.icon,
            description: row.description.extract_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueMageCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
}

impl FromRow<ActionRow> for BlueMageCollectible {
    fn from_row(row: &ActionRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: u32::from(row.icon),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrionCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub description: String,
}

impl FromRow<OrchestrionRow> for OrchestrionCollectible {
    fn from_row(row: &OrchestrionRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: row.icon,
            description: row.description.extract_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlassesCollectible {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub style: RowId,
}

impl FromRow<GlassesRow> for GlassesCollectible {
    fn from_row(row: &GlassesRow) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: row.icon,
            style: row.style,
        }
    }
}
