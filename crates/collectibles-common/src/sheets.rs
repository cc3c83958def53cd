//! Raw sheet rows as the host dataset exposes them.
//!
//! Field shapes follow the dataset, quirks included: links to other sheets
//! are bare row ids, text is rich [`SeString`], and icon widths differ from
//! sheet to sheet. Adapters in the catalog crate flatten these.

use crate::{RowId, SeString, SheetRow};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! sheet_row {
    ($($ty:ident => $sheet:literal),+ $(,)?) => {
        $(
            impl SheetRow for $ty {
                const SHEET: &'static str = $sheet;

                fn row_id(&self) -> RowId {
                    self.row_id
                }
            }
        )+
    };
}

sheet_row! {
    ItemRow => "Item",
    EquipSlotCategoryRow => "EquipSlotCategory",
    ItemActionRow => "ItemAction",
    MountRow => "Mount",
    CompanionRow => "Companion",
    EmoteRow => "Emote",
    CharaMakeCustomizeRow => "CharaMakeCustomize",
    HairMakeTypeRow => "HairMakeType",
    LobbyRow => "Lobby",
    TripleTriadCardRow => "TripleTriadCard",
    ActionRow => "Action",
    BuddyEquipRow => "BuddyEquip",
    OrchestrionRow => "Orchestrion",
    OrnamentRow => "Ornament",
    GlassesRow => "Glasses",
    GlassesStyleRow => "GlassesStyle",
    ClassJobRow => "ClassJob",
    StainRow => "Stain",
}

/* ───────────────────────────── items ───────────────────────────── */

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemRow {
    pub row_id: RowId,
    pub name: SeString,
    pub icon: u16,
    pub level_equip: u8,
    /// Link into `EquipSlotCategory`; 0 for non-equipment.
    pub equip_slot_category: RowId,
    /// Link into `ItemUICategory`.
    pub item_ui_category: RowId,
    /// Link into `ItemAction`; 0 when the item has no use action.
    pub item_action: RowId,
    pub dye_count: u8,
}

/// Per-slot occupancy flags. `1` occupies the slot, `-1` blocks it, `0` is
/// unused.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EquipSlotCategoryRow {
    pub row_id: RowId,
    pub main_hand: i8,
    pub off_hand: i8,
    pub head: i8,
    pub body: i8,
    pub gloves: i8,
    pub waist: i8,
    pub legs: i8,
    pub feet: i8,
    pub ears: i8,
    pub neck: i8,
    pub wrists: i8,
    pub finger_r: i8,
    pub finger_l: i8,
    pub soul_crystal: i8,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemActionRow {
    pub row_id: RowId,
    pub action_type: u16,
}

/* ─────────────────────────── companions ─────────────────────────── */

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MountRow {
    pub row_id: RowId,
    pub singular: SeString,
    /// Journal order; `-1` marks rows that never appear in the mount guide.
    pub order: i16,
    pub icon: u16,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanionRow {
    pub row_id: RowId,
    pub singular: SeString,
    pub icon: u16,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuddyEquipRow {
    pub row_id: RowId,
    pub name: SeString,
    pub icon_head: u16,
    pub icon_body: u16,
    pub icon_legs: u16,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrnamentRow {
    pub row_id: RowId,
    pub singular: SeString,
    pub icon: u16,
}

/* ──────────────────────────── emotes ──────────────────────────── */

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmoteRow {
    pub row_id: RowId,
    pub name: SeString,
    pub icon: u16,
    /// Unlock condition link; 0 for emotes every character starts with.
    pub unlock_link: u32,
}

/* ─────────────────────── character creation ─────────────────────── */

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharaMakeCustomizeRow {
    pub row_id: RowId,
    pub is_purchasable: bool,
    pub icon: u32,
    /// Model feature id the row customizes to.
    pub feature_id: u8,
    /// Link into `Item` for the unlock item; 0 for default styles.
    pub hint_item: RowId,
}

/// One customization menu of a character-creation parameter row.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharaMakeStruct {
    /// Link into `Lobby` for the menu label.
    pub menu: RowId,
    /// Referenced `CharaMakeCustomize` rows; 0 pads unused slots.
    pub sub_menu_param: Vec<u32>,
}

/// Character-creation parameters for one (race, tribe, gender).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HairMakeTypeRow {
    pub row_id: RowId,
    pub race: RowId,
    pub tribe: RowId,
    pub gender: i8,
    pub chara_make_struct: Vec<CharaMakeStruct>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LobbyRow {
    pub row_id: RowId,
    pub text: SeString,
}

/* ──────────────────────────── the rest ──────────────────────────── */

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripleTriadCardRow {
    pub row_id: RowId,
    pub name: SeString,
    pub description: SeString,
    pub icon: u32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionRow {
    pub row_id: RowId,
    pub name: SeString,
    pub icon: u16,
    /// Link into `ClassJob`.
    pub class_job: RowId,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrchestrionRow {
    pub row_id: RowId,
    pub name: SeString,
    pub description: SeString,
    pub icon: u32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlassesRow {
    pub row_id: RowId,
    pub name: SeString,
    pub icon: u32,
    /// Link into `GlassesStyle`.
    pub style: RowId,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlassesStyleRow {
    pub row_id: RowId,
    pub name: SeString,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassJobRow {
    pub row_id: RowId,
    pub name: SeString,
    pub abbreviation: SeString,
    /// Link into `ClassJobCategory`; 0 for junk rows.
    pub class_job_category: RowId,
    pub job_index: u8,
    /// `-1` for combat classes.
    pub doh_dol_job_index: i8,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StainRow {
    pub row_id: RowId,
    pub name: SeString,
    /// `0xRRGGBB`.
    pub color: u32,
    pub shade: u8,
}
