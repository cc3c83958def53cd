use collectibles_common::{
    EquipSlot, EquipSlotCategoryRow, ItemActionRow, ItemRow, RowId, SheetIndex, SheetRow,
};

use crate::fanout::filter_map_rows;
use crate::source::RowSource;

/// An `Item` row with its slot and action links resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAdapter {
    pub row_id: RowId,
    pub name: String,
    pub icon: u32,
    pub level_equip: u8,
    /// `None` for items that are not worn.
    pub equip_slot: Option<EquipSlot>,
    pub ui_category: RowId,
    /// Type of the linked `ItemAction`; 0 when there is none.
    pub action_type: u16,
    pub dye_count: u8,
}

impl SheetRow for ItemAdapter {
    const SHEET: &'static str = ItemRow::SHEET;

    fn row_id(&self) -> RowId {
        self.row_id
    }
}

impl ItemAdapter {
    pub fn adapt(
        row: &ItemRow,
        slots: &SheetIndex<'_, EquipSlotCategoryRow>,
        actions: &SheetIndex<'_, ItemActionRow>,
    ) -> Self {
        Self {
            row_id: row.row_id,
            name: row.name.extract_text(),
            icon: u32::from(row.icon),
            level_equip: row.level_equip,
            equip_slot: slots.get(row.equip_slot_category).and_then(equip_slot_of),
            ui_category: row.item_ui_category,
            action_type: actions
                .get(row.item_action)
                .map(|a| a.action_type)
                .unwrap_or(0),
            dye_count: row.dye_count,
        }
    }
}

/// The slot an equip-slot category occupies: the first slot flagged `1`.
pub fn equip_slot_of(category: &EquipSlotCategoryRow) -> Option<EquipSlot> {
    [
        (EquipSlot::MainHand, category.main_hand),
        (EquipSlot::OffHand, category.off_hand),
        (EquipSlot::Head, category.head),
        (EquipSlot::Body, category.body),
        (EquipSlot::Gloves, category.gloves),
        (EquipSlot::Waist, category.waist),
        (EquipSlot::Legs, category.legs),
        (EquipSlot::Feet, category.feet),
        (EquipSlot::Ears, category.ears),
        (EquipSlot::Neck, category.neck),
        (EquipSlot::Wrists, category.wrists),
        (EquipSlot::FingerR, category.finger_r),
        (EquipSlot::FingerL, category.finger_l),
        (EquipSlot::SoulCrystal, category.soul_crystal),
    ]
    .into_iter()
    .find_map(|(slot, flag)| (flag == 1).then_some(slot))
}

/// Adapt the whole `Item` sheet, in row order.
pub fn adapt_items<S: RowSource + ?Sized>(source: &S, parallel: bool) -> Vec<ItemAdapter> {
    let slots = SheetIndex::new(source.equip_slot_categories());
    let actions = SheetIndex::new(source.item_actions());
    filter_map_rows(source.items(), parallel, |row| {
        Some(ItemAdapter::adapt(row, &slots, &actions))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_source::InMemorySource;

    #[test]
    fn first_occupied_slot_wins() {
        let ring = EquipSlotCategoryRow {
            row_id: 12,
            finger_l: 1,
            finger_r: 1,
            ..Default::default()
        };
        assert_eq!(equip_slot_of(&ring), Some(EquipSlot::FingerR));

        let two_handed = EquipSlotCategoryRow {
            row_id: 13,
            main_hand: 1,
            off_hand: -1,
            ..Default::default()
        };
        assert_eq!(equip_slot_of(&two_handed), Some(EquipSlot::MainHand));

        let blocked_only = EquipSlotCategoryRow {
            row_id: 14,
            head: -1,
            ..Default::default()
        };
        assert_eq!(equip_slot_of(&blocked_only), None);
    }

    #[test]
    fn dangling_links_normalize_to_empty() {
        let source = InMemorySource::new()
            .with_items([ItemRow {
                row_id: 2000,
                name: "Bronze Dagger".into(),
                icon: 30401,
                level_equip: 1,
                equip_slot_category: 99,
                item_ui_category: 2,
                item_action: 77,
                dye_count: 1,
            }])
            .with_item_actions([ItemActionRow {
                row_id: 0,
                action_type: 0,
            }]);
        let items = adapt_items(&source, false);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bronze Dagger");
        assert_eq!(items[0].icon, 30401);
        assert_eq!(items[0].equip_slot, None);
        assert_eq!(items[0].action_type, 0);
    }
}
