use std::borrow::Cow;

use collectibles_common::{
    CharaMakeCustomizeRow, CharaMakeStruct, ItemRow, LobbyRow, RowId, SheetIndex, SheetRow,
};

/// A `CharaMakeCustomize` row named after the item that unlocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharaMakeCustomizeAdapter {
    pub row_id: RowId,
    pub is_purchasable: bool,
    pub icon: u32,
    pub feature_id: u8,
    /// Unlock item name; empty for default styles.
    pub name: String,
}

impl SheetRow for CharaMakeCustomizeAdapter {
    const SHEET: &'static str = CharaMakeCustomizeRow::SHEET;

    fn row_id(&self) -> RowId {
        self.row_id
    }
}

impl CharaMakeCustomizeAdapter {
    pub fn adapt(row: &CharaMakeCustomizeRow, items: &SheetIndex<'_, ItemRow>) -> Self {
        let name = match row.hint_item {
            0 => String::new(),
            id => items
                .get(id)
                .map(|item| item.name.extract_text())
                .unwrap_or_default(),
        };
        Self {
            row_id: row.row_id,
            is_purchasable: row.is_purchasable,
            icon: row.icon,
            feature_id: row.feature_id,
            name,
        }
    }
}

/// Plain-text label of a customization menu; empty when the `Lobby` link
/// dangles.
pub fn menu_label<'a>(entry: &CharaMakeStruct, lobby: &SheetIndex<'a, LobbyRow>) -> Cow<'a, str> {
    lobby
        .get(entry.menu)
        .map(|row| row.text.text())
        .unwrap_or(Cow::Borrowed(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use collectibles_common::{Payload, SeString};

    #[test]
    fn menu_label_strips_formatting() {
        let lobby = [LobbyRow {
            row_id: 7,
            text: SeString::from_payloads(vec![
                Payload::Macro {
                    code: 0x13,
                    params: vec![1],
                },
                Payload::Text("Hairstyle".into()),
            ]),
        }];
        let index = SheetIndex::new(&lobby);
        let entry = CharaMakeStruct {
            menu: 7,
            sub_menu_param: vec![],
        };
        assert_eq!(menu_label(&entry, &index), "Hairstyle");

        let dangling = CharaMakeStruct {
            menu: 8,
            sub_menu_param: vec![],
        };
        assert_eq!(menu_label(&dangling, &index), "");
    }

    #[test]
    fn name_comes_from_hint_item() {
        let items = [ItemRow {
            row_id: 24233,
            name: "Modern Aesthetics - Curled Bob".into(),
            ..Default::default()
        }];
        let index = SheetIndex::new(&items);
        let row = CharaMakeCustomizeRow {
            row_id: 228,
            is_purchasable: true,
            icon: 4_001,
            feature_id: 201,
            hint_item: 24233,
        };
        let adapted = CharaMakeCustomizeAdapter::adapt(&row, &index);
        assert_eq!(adapted.name, "Modern Aesthetics - Curled Bob");

        let default_style = CharaMakeCustomizeRow {
            hint_item: 0,
            ..row
        };
        assert_eq!(CharaMakeCustomizeAdapter::adapt(&default_style, &index).name, "");
    }
}
